//! In-memory vault used for previews and tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

use super::record::{DocumentRef, FileRecord};
use super::traits::{Vault, VaultError, VaultResult};

/// A vault whose files and documents live in memory.
///
/// Keeps counters of every call so callers can verify which host operations
/// an activity logger performed.
#[derive(Debug, Default)]
pub struct MemoryVault {
    files: Vec<FileRecord>,
    documents: RefCell<HashMap<PathBuf, String>>,
    listings: Cell<usize>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the file list of `source`, and the current text of `document`
    /// when given, into a fresh in-memory vault.
    pub fn snapshot<V: Vault + ?Sized>(
        source: &V,
        document: Option<&DocumentRef>,
    ) -> VaultResult<Self> {
        let vault = Self { files: source.list_files()?, ..Self::default() };
        if let Some(doc) = document {
            vault.set_document(doc, source.read_text(doc)?);
        }
        Ok(vault)
    }

    pub fn with_file(mut self, record: FileRecord) -> Self {
        self.files.push(record);
        self
    }

    pub fn with_document(self, doc: impl Into<DocumentRef>, content: impl Into<String>) -> Self {
        self.set_document(&doc.into(), content);
        self
    }

    pub fn set_document(&self, doc: &DocumentRef, content: impl Into<String>) {
        self.documents.borrow_mut().insert(doc.path().to_path_buf(), content.into());
    }

    /// Current text of a document, without counting as a read.
    pub fn document(&self, doc: &DocumentRef) -> Option<String> {
        self.documents.borrow().get(doc.path()).cloned()
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn listings(&self) -> usize {
        self.listings.get()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Vault for MemoryVault {
    fn list_files(&self) -> VaultResult<Vec<FileRecord>> {
        self.listings.set(self.listings.get() + 1);
        Ok(self.files.clone())
    }

    fn read_text(&self, doc: &DocumentRef) -> VaultResult<String> {
        self.reads.set(self.reads.get() + 1);
        self.document(doc).ok_or_else(|| VaultError::DocumentNotFound(doc.to_string()))
    }

    fn write_text(&self, doc: &DocumentRef, content: &str) -> VaultResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.set_document(doc, content);
        Ok(())
    }
}
