// Fri Oct 16 2026 - Alex

use crate::error::{CheckError, CheckResult};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.h`
    Header,
    /// `.cppm`
    Interface,
    /// `.module.cpp`
    ModuleUnit,
    /// `.default.cpp`
    DefaultUnit,
    Other,
}

impl FileKind {
    pub fn of(path: &Path) -> Self {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => return FileKind::Other,
        };

        if name.ends_with(".module.cpp") {
            FileKind::ModuleUnit
        } else if name.ends_with(".default.cpp") {
            FileKind::DefaultUnit
        } else if name.ends_with(".cppm") {
            FileKind::Interface
        } else if name.ends_with(".h") {
            FileKind::Header
        } else {
            FileKind::Other
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// Every non-hidden file under `root`, sorted by path. Any walk error aborts.
pub fn list_files(root: &Path) -> CheckResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CheckError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CheckError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    log::debug!("listed {} files under {}", files.len(), root.display());
    Ok(files)
}
