//! Filesystem-backed vault.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::{DocumentRef, FileRecord};
use super::traits::{Vault, VaultError, VaultResult};
use super::walker::VaultWalker;

/// A vault rooted at a directory on disk.
#[derive(Debug)]
pub struct FsVault {
    walker: VaultWalker,
}

impl FsVault {
    /// Open the vault at `root`.
    pub fn open(root: &Path) -> VaultResult<Self> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Open the vault at `root`, skipping the given folders during enumeration.
    pub fn with_exclusions(root: &Path, excluded_folders: Vec<PathBuf>) -> VaultResult<Self> {
        let walker = VaultWalker::with_exclusions(root, excluded_folders)?;
        Ok(Self { walker })
    }

    /// Canonical vault root.
    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Absolute path of a document inside (or outside) this vault.
    pub fn resolve(&self, doc: &DocumentRef) -> PathBuf {
        self.root().join(doc.path())
    }
}

impl Vault for FsVault {
    fn list_files(&self) -> VaultResult<Vec<FileRecord>> {
        let files = self.walker.walk()?;
        debug!(count = files.len(), root = %self.root().display(), "enumerated vault files");
        Ok(files.into_iter().map(FileRecord::from).collect())
    }

    fn read_text(&self, doc: &DocumentRef) -> VaultResult<String> {
        let path = self.resolve(doc);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VaultError::DocumentNotFound(path.display().to_string()),
            _ => VaultError::ReadError(path.display().to_string(), e),
        })
    }

    fn write_text(&self, doc: &DocumentRef, content: &str) -> VaultResult<()> {
        let path = self.resolve(doc);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| VaultError::WriteError(path.display().to_string(), e))?;
        }
        fs::write(&path, content)
            .map_err(|e| VaultError::WriteError(path.display().to_string(), e))
    }
}
