//! The capability the activity logger needs from its host.

use super::record::{DocumentRef, FileRecord};
use super::walker::VaultWalkerError;

/// Errors surfaced by vault implementations.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error(transparent)]
    Walk(#[from] VaultWalkerError),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("failed to read document {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to write document {0}: {1}")]
    WriteError(String, #[source] std::io::Error),
}

pub type VaultResult<T> = Result<T, VaultError>;

/// File enumeration plus whole-document read and write.
///
/// Implementations make no atomicity promises: a document changed between
/// [`Vault::read_text`] and [`Vault::write_text`] is overwritten.
pub trait Vault {
    /// Every file in the vault, in the vault's enumeration order.
    fn list_files(&self) -> VaultResult<Vec<FileRecord>>;

    /// Full text of a document.
    fn read_text(&self, doc: &DocumentRef) -> VaultResult<String>;

    /// Replace the full text of a document.
    fn write_text(&self, doc: &DocumentRef, content: &str) -> VaultResult<()>;
}

impl<V: Vault + ?Sized> Vault for &V {
    fn list_files(&self) -> VaultResult<Vec<FileRecord>> {
        (**self).list_files()
    }

    fn read_text(&self, doc: &DocumentRef) -> VaultResult<String> {
        (**self).read_text(doc)
    }

    fn write_text(&self, doc: &DocumentRef, content: &str) -> VaultResult<()> {
        (**self).write_text(doc, content)
    }
}
