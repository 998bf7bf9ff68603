// Fri Oct 16 2026 - Alex

use serde::Serialize;
use std::fmt;

/// Canonical spelling of a dependency: dotted (`uwvm2.utils.container`) or a
/// same-directory partition (`:def`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DependencyName(String);

impl DependencyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn partition(stem: &str) -> Self {
        Self(format!(":{}", stem))
    }

    /// `a/b/c` -> `a.b.c`
    pub fn from_path(path: &str) -> Self {
        Self(path.replace('/', "."))
    }

    pub fn is_partition(&self) -> bool {
        self.0.starts_with(':')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DependencyName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
