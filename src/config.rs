// Fri Oct 16 2026 - Alex

use crate::error::{CheckError, CheckResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub src_root: PathBuf,
    pub naming: NamingPolicy,
    pub extra_includes: ExtraIncludePolicy,
    pub max_threads: usize,
    pub parallel: bool,
}

/// Spellings that tie the two dependency notations to one project layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingPolicy {
    /// Macro guarding the non-module compilation path (`#ifndef <macro>`).
    pub module_macro: String,
    /// Leading namespace stripped before category classification.
    pub project_prefix: String,
    /// External umbrella dependency, spelled as `<name>.h` or `<name>/...` in headers.
    pub umbrella: String,
    /// Filename of the header that re-exports a submodule.
    pub aggregator: String,
    pub header_suffix: String,
    /// Include paths containing any of these are macro helpers, never dependencies.
    pub ignored_markers: Vec<String>,
}

/// What happens to header includes that the impl-aggregate restriction filters out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtraIncludePolicy {
    Drop,
    Advise,
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_root: PathBuf::from("src"),
            naming: NamingPolicy::default(),
            extra_includes: ExtraIncludePolicy::Drop,
            max_threads: num_cpus::get(),
            parallel: true,
        }
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            module_macro: "UWVM_MODULE".to_string(),
            project_prefix: "uwvm2".to_string(),
            umbrella: "fast_io".to_string(),
            aggregator: "impl.h".to_string(),
            header_suffix: ".h".to_string(),
            ignored_markers: vec![
                "macro/push_macros.h".to_string(),
                "macro/pop_macros.h".to_string(),
                "uwvm_color_push_macro.h".to_string(),
                "uwvm_color_pop_macro.h".to_string(),
            ],
        }
    }
}

impl Default for ExtraIncludePolicy {
    fn default() -> Self {
        ExtraIncludePolicy::Drop
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> CheckResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_src_root(mut self, root: PathBuf) -> Self {
        self.src_root = root;
        self
    }

    pub fn with_extra_includes(mut self, policy: ExtraIncludePolicy) -> Self {
        self.extra_includes = policy;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> CheckResult<()> {
        if self.max_threads == 0 {
            return Err(CheckError::Config("max_threads must be greater than 0".to_string()));
        }
        let naming = &self.naming;
        if naming.module_macro.trim().is_empty() {
            return Err(CheckError::Config("module_macro must not be empty".to_string()));
        }
        if naming.umbrella.is_empty() || naming.umbrella.contains('/') {
            return Err(CheckError::Config(format!("invalid umbrella name: {:?}", naming.umbrella)));
        }
        if !naming.aggregator.ends_with(&naming.header_suffix) || naming.aggregator.contains('/') {
            return Err(CheckError::Config(format!(
                "aggregator {:?} must be a bare filename ending in {:?}",
                naming.aggregator, naming.header_suffix
            )));
        }
        if naming.header_suffix.is_empty() {
            return Err(CheckError::Config("header_suffix must not be empty".to_string()));
        }
        Ok(())
    }
}

impl NamingPolicy {
    /// `<project_prefix>.`, the dotted form of the project namespace.
    pub fn dotted_prefix(&self) -> String {
        format!("{}.", self.project_prefix)
    }

    /// `<project_prefix>/`, the include-path form of the project namespace.
    pub fn path_prefix(&self) -> String {
        format!("{}/", self.project_prefix)
    }

    pub fn is_ignored(&self, include: &str) -> bool {
        self.ignored_markers.iter().any(|m| include.contains(m.as_str()))
    }
}
