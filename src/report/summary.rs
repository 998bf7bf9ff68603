// Fri Oct 16 2026 - Alex

use super::violation::{Violation, ViolationKind};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files_listed: usize,
    pub headers_checked: usize,
    pub pairs_checked: usize,
}

/// Everything one run found. Violations keep discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub violations: Vec<Violation>,
    pub stats: ScanStats,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    pub fn merge(&mut self, other: Report) {
        self.violations.extend(other.violations);
        self.stats.files_listed = self.stats.files_listed.max(other.stats.files_listed);
        self.stats.headers_checked += other.stats.headers_checked;
        self.stats.pairs_checked += other.stats.pairs_checked;
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    pub fn advisories(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn count_by_kind(&self) -> HashMap<ViolationKind, usize> {
        let mut counts = HashMap::new();
        for v in &self.violations {
            *counts.entry(v.kind).or_insert(0) += 1;
        }
        counts
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// 0 when clean, 1 when any error-severity violation was found.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }

    pub fn format_text(&self) -> String {
        let mut output = String::new();

        if self.violations.is_empty() {
            output.push_str("No violations found.\n");
            return output;
        }

        if self.is_clean() {
            output.push_str("No violations found.\n");
        } else {
            output.push_str("Found issues:\n");
            for v in self.errors() {
                output.push_str(&format!("{}\n", v));
            }
        }

        let advisories: Vec<_> = self.advisories().collect();
        if !advisories.is_empty() {
            output.push_str("Advisories:\n");
            for v in advisories {
                output.push_str(&format!("{}\n", v));
            }
        }

        output
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::DependencyName;
    use crate::report::violation::Severity;
    use std::path::Path;

    #[test]
    fn test_empty_report_is_clean() {
        let report = Report::new();
        assert!(report.is_clean());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.format_text(), "No violations found.\n");
    }

    #[test]
    fn test_errors_fail_the_run() {
        let mut report = Report::new();
        report.add(Violation::guard_order(Path::new("a.h"), 2, "msg"));
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.format_text(), "Found issues:\n[GUARD-ORDER] a.h:2: msg\n");
    }

    #[test]
    fn test_advisories_do_not_fail_the_run() {
        let mut report = Report::new();
        report.add(Violation::extra_include(
            Path::new("impl.cppm"),
            Path::new("impl.h"),
            &[DependencyName::from("x.y")],
            Severity::Advisory,
        ));
        assert_eq!(report.exit_code(), 0);
        let text = report.format_text();
        assert!(text.starts_with("No violations found.\nAdvisories:\n[EXTRA] "));
    }

    #[test]
    fn test_merge_accumulates() {
        let mut a = Report::new();
        a.stats.headers_checked = 2;
        a.add(Violation::guard_order(Path::new("a.h"), 2, "one"));

        let mut b = Report::new();
        b.stats.pairs_checked = 3;
        b.add(Violation::guard_order(Path::new("b.h"), 5, "two"));

        a.merge(b);
        assert_eq!(a.violations.len(), 2);
        assert_eq!(a.stats.headers_checked, 2);
        assert_eq!(a.stats.pairs_checked, 3);
        assert_eq!(a.count_by_kind()[&ViolationKind::GuardOrder], 2);
    }

    #[test]
    fn test_json_round_trip_shape() {
        let mut report = Report::new();
        report.add(Violation::guard_order(Path::new("a.h"), 2, "msg"));
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["violations"][0]["kind"], "guard-order");
        assert_eq!(value["stats"]["headers_checked"], 0);
    }
}
