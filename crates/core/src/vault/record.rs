//! Value types handed out by a vault.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use super::walker::WalkedFile;

/// A file known to the vault with its timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Vault-relative path using `/` separators.
    pub path: String,
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
}

impl FileRecord {
    pub fn new(
        path: impl Into<String>,
        created: DateTime<Local>,
        modified: DateTime<Local>,
    ) -> Self {
        Self { path: path.into(), created, modified }
    }

    /// True when the file was created on `day` (local time).
    pub fn created_on(&self, day: NaiveDate) -> bool {
        self.created.date_naive() == day
    }

    /// True when the file was last modified on `day` (local time).
    pub fn modified_on(&self, day: NaiveDate) -> bool {
        self.modified.date_naive() == day
    }
}

impl From<WalkedFile> for FileRecord {
    fn from(file: WalkedFile) -> Self {
        let path = file
            .relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Self {
            path,
            created: DateTime::<Local>::from(file.created),
            modified: DateTime::<Local>::from(file.modified),
        }
    }
}

/// The document an operation appends to.
///
/// Relative paths are resolved against the vault root; absolute paths are
/// used as they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    path: PathBuf,
}

impl DocumentRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<&str> for DocumentRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for DocumentRef {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for DocumentRef {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
