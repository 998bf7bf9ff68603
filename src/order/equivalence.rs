// Fri Oct 16 2026 - Alex

use crate::deps::DependencyName;
use indexmap::IndexSet;
use itertools::Itertools;
use serde::Serialize;

/// Drops repeats, keeping each name at its first position.
pub fn stable_unique(seq: &[DependencyName]) -> Vec<DependencyName> {
    seq.iter().cloned().collect::<IndexSet<_>>().into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceDiff {
    pub expected: Vec<DependencyName>,
    pub found: Vec<DependencyName>,
    /// In `expected` but not in `found`.
    pub missing: Vec<DependencyName>,
    /// In `found` but not in `expected`.
    pub extra: Vec<DependencyName>,
}

impl SequenceDiff {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Expected (A): {}", self.expected.iter().join(", ")),
            format!("Found    (B): {}", self.found.iter().join(", ")),
        ];
        if !self.missing.is_empty() {
            lines.push(format!("Missing in B: {}", self.missing.iter().join(", ")));
        }
        if !self.extra.is_empty() {
            lines.push(format!("Extra in B: {}", self.extra.iter().join(", ")));
        }
        lines
    }
}

/// `None` when both sequences are equal after [`stable_unique`].
pub fn compare_sequences(expected: &[DependencyName], found: &[DependencyName]) -> Option<SequenceDiff> {
    let a: IndexSet<DependencyName> = expected.iter().cloned().collect();
    let b: IndexSet<DependencyName> = found.iter().cloned().collect();

    if a.iter().eq(b.iter()) {
        return None;
    }

    Some(SequenceDiff {
        missing: a.difference(&b).cloned().collect(),
        extra: b.difference(&a).cloned().collect(),
        expected: a.into_iter().collect(),
        found: b.into_iter().collect(),
    })
}
