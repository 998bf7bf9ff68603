// Fri Oct 16 2026 - Alex

use crate::error::{CheckError, CheckResult};
use std::fs;
use std::path::{Path, PathBuf};

/// A file read once, fully, and never modified afterwards.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn load(path: &Path) -> CheckResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_handle_crlf() {
        let file = SourceFile::from_text("a.h", "#pragma once\r\n#ifndef A\r\n");
        assert_eq!(file.lines(), vec!["#pragma once", "#ifndef A"]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.h");
        match SourceFile::load(&missing) {
            Err(CheckError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.h");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(SourceFile::load(&path).is_err());
    }
}
