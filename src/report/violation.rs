// Fri Oct 16 2026 - Alex

use crate::deps::DependencyName;
use crate::order::{OrderBreach, SequenceDiff};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    GuardOrder,
    Order,
    Mismatch,
    ExtraInclude,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::GuardOrder => "guard-order",
            ViolationKind::Order => "order",
            ViolationKind::Mismatch => "mismatch",
            ViolationKind::ExtraInclude => "extra-include",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ViolationKind::GuardOrder => "[GUARD-ORDER]",
            ViolationKind::Order => "[ORDER]",
            ViolationKind::Mismatch => "[MISMATCH]",
            ViolationKind::ExtraInclude => "[EXTRA]",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisories are printed but never fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Advisory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    pub paths: Vec<PathBuf>,
    /// 1-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl Violation {
    pub fn guard_order(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::GuardOrder,
            severity: Severity::Error,
            paths: vec![path.to_path_buf()],
            line: Some(line),
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn order(path: &Path, breach: &OrderBreach) -> Self {
        Self {
            kind: ViolationKind::Order,
            severity: Severity::Error,
            paths: vec![path.to_path_buf()],
            line: None,
            message: breach.message(),
            details: Vec::new(),
        }
    }

    pub fn mismatch(module: &Path, header: &Path, diff: &SequenceDiff) -> Self {
        Self {
            kind: ViolationKind::Mismatch,
            severity: Severity::Error,
            paths: vec![module.to_path_buf(), header.to_path_buf()],
            line: None,
            message: "imports and guarded includes differ".to_string(),
            details: diff.lines(),
        }
    }

    pub fn extra_include(module: &Path, header: &Path, dropped: &[DependencyName], severity: Severity) -> Self {
        Self {
            kind: ViolationKind::ExtraInclude,
            severity,
            paths: vec![module.to_path_buf(), header.to_path_buf()],
            line: None,
            message: format!(
                "header includes not imported by the module: {}",
                dropped.iter().unique().join(", ")
            ),
            details: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// One-line summary, without the kind tag.
    pub fn headline(&self) -> String {
        let paths = self.paths.iter().map(|p| p.display()).join(" <-> ");
        match (self.kind, self.line) {
            (ViolationKind::Mismatch, _) => paths,
            (_, Some(line)) => format!("{}:{}: {}", paths, line, self.message),
            (_, None) => format!("{}: {}", paths, self.message),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.tag(), self.headline())?;
        for detail in &self.details {
            write!(f, "\n  {}", detail)?;
        }
        Ok(())
    }
}
