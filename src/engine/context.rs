// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::error::{CheckError, CheckResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Module/header pair equivalence and include order.
    Module,
    /// `#pragma once` guard order on every header.
    Guard,
    All,
}

impl CheckMode {
    pub fn includes_module(&self) -> bool {
        matches!(self, CheckMode::Module | CheckMode::All)
    }

    pub fn includes_guard(&self) -> bool {
        matches!(self, CheckMode::Guard | CheckMode::All)
    }
}

/// Everything a run needs, passed explicitly to the drivers.
#[derive(Debug, Clone)]
pub struct RunContext {
    root: PathBuf,
    config: Config,
}

impl RunContext {
    pub fn new(config: Config) -> CheckResult<Self> {
        config.validate()?;
        Ok(Self {
            root: config.src_root.clone(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stem shared by the aggregator pair, `impl` for `impl.h`.
    pub fn aggregate_stem(&self) -> CheckResult<&str> {
        let naming = &self.config.naming;
        naming
            .aggregator
            .strip_suffix(naming.header_suffix.as_str())
            .ok_or_else(|| CheckError::Config(format!("bad aggregator name {:?}", naming.aggregator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_config() {
        let ctx = RunContext::new(Config::new().with_src_root(PathBuf::from("tree"))).unwrap();
        assert_eq!(ctx.root(), Path::new("tree"));
        assert_eq!(ctx.aggregate_stem().unwrap(), "impl");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(RunContext::new(Config::new().with_max_threads(0)).is_err());
    }

    #[test]
    fn test_modes() {
        assert!(CheckMode::All.includes_guard() && CheckMode::All.includes_module());
        assert!(!CheckMode::Guard.includes_module());
        assert!(!CheckMode::Module.includes_guard());
    }
}
