//! Recursive vault directory walker.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read file metadata {0}: {1}")]
    MetadataError(String, #[source] std::io::Error),
}

/// Information about a discovered vault file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Path relative to vault root.
    pub relative_path: PathBuf,
    /// File creation (birth) time, or the modification time where the
    /// filesystem does not record one.
    pub created: SystemTime,
    /// File modification time.
    pub modified: SystemTime,
}

/// Walker for discovering files in a vault.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from vault root (e.g., "automations/templates")
    /// - Absolute paths (will be converted to relative)
    ///
    /// Absolute exclusions are matched against both the given root and its
    /// canonical form, so a root reached through a symlink still excludes them.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let given_root = root;
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(VaultWalkerError::MissingRoot(root.display().to_string()));
        }

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| if p.is_absolute() { relative_exclusion(&p, given_root, &root) } else { p })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Walk the vault and return every regular file, sorted by relative path.
    /// Excludes hidden entries, common non-vault directories, and configured exclusions.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let metadata = path.metadata().map_err(|e| {
                VaultWalkerError::MetadataError(path.display().to_string(), e)
            })?;

            let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
            let created = metadata.created().unwrap_or(modified);

            files.push(WalkedFile {
                relative_path: path.strip_prefix(&self.root).unwrap_or(path).to_path_buf(),
                created,
                modified,
            });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        // Hidden entries cover editor state such as .obsidian and .git
        if name.starts_with('.') {
            return true;
        }

        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            return self.excluded_folders.iter().any(|excluded| relative.starts_with(excluded));
        }

        false
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Express an absolute exclusion relative to the vault root.
///
/// Falls back to the path itself when it lies outside the vault.
fn relative_exclusion(path: &Path, given_root: &Path, root: &Path) -> PathBuf {
    if let Ok(relative) = path.strip_prefix(given_root) {
        return relative.to_path_buf();
    }
    if let Ok(relative) = path.strip_prefix(root) {
        return relative.to_path_buf();
    }
    if let Ok(canonical) = path.canonicalize()
        && let Ok(relative) = canonical.strip_prefix(root)
    {
        return relative.to_path_buf();
    }
    path.to_path_buf()
}
