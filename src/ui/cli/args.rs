// Fri Oct 16 2026 - Alex

use crate::config::{Config, ExtraIncludePolicy};
use crate::engine::CheckMode;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modcheck")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Module/header consistency checks for a C++ source tree", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true)]
    pub json: bool,

    /// JSON file with config overrides
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub threads: Option<usize>,

    #[arg(long, global = true)]
    pub sequential: bool,

    /// What to do with aggregator header includes the module side does not import
    #[arg(long, global = true, value_enum)]
    pub extra_includes: Option<ExtraIncludePolicy>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare .cppm/.h and .module.cpp/.default.cpp dependency lists
    Module(TreeArgs),
    /// Check that `#pragma once` is followed by `#ifndef`
    Guard(TreeArgs),
    /// Run both checks
    All(TreeArgs),
}

#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Source root to scan
    pub root: Option<PathBuf>,
}

impl Command {
    pub fn mode(&self) -> CheckMode {
        match self {
            Command::Module(_) => CheckMode::Module,
            Command::Guard(_) => CheckMode::Guard,
            Command::All(_) => CheckMode::All,
        }
    }

    pub fn tree(&self) -> &TreeArgs {
        match self {
            Command::Module(tree) | Command::Guard(tree) | Command::All(tree) => tree,
        }
    }
}

impl Args {
    /// Defaults, then the config file, then command-line flags.
    pub fn build_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(root) = &self.command.tree().root {
            config = config.with_src_root(root.clone());
        }
        if let Some(threads) = self.threads {
            config = config.with_max_threads(threads);
        }
        if self.sequential {
            config = config.with_parallel(false);
        }
        if let Some(policy) = self.extra_includes {
            config = config.with_extra_includes(policy);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["modcheck", "all"]).unwrap();
        assert_eq!(args.command.mode(), CheckMode::All);
        assert_eq!(args.log_level, "warn");

        let config = args.build_config().unwrap();
        assert_eq!(config.src_root, PathBuf::from("src"));
        assert!(config.parallel);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "modcheck",
            "guard",
            "tree/src",
            "--threads",
            "2",
            "--sequential",
            "--extra-includes",
            "advise",
        ])
        .unwrap();
        assert_eq!(args.command.mode(), CheckMode::Guard);

        let config = args.build_config().unwrap();
        assert_eq!(config.src_root, PathBuf::from("tree/src"));
        assert_eq!(config.max_threads, 2);
        assert!(!config.parallel);
        assert_eq!(config.extra_includes, ExtraIncludePolicy::Advise);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let args = Args::try_parse_from(["modcheck", "module", "--threads", "0"]).unwrap();
        assert!(args.build_config().is_err());
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        assert!(Args::try_parse_from(["modcheck"]).is_err());
    }
}
