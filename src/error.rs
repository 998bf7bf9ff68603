// Fri Oct 16 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Source root does not exist: {0}")]
    RootNotFound(PathBuf),
    #[error("Source root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type CheckResult<T> = Result<T, CheckError>;
