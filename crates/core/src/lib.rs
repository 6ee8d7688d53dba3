//! Core library for daylog.
//!
//! Scans a vault for files created or modified on given calendar days and
//! appends Markdown link lists or summary tables to a target document.

pub mod activity;
pub mod config;
pub mod dates;
pub mod vault;

pub use activity::{
    ActivityLogOptions, ActivityLogger, FileStatsOptions, InsertOutcome, StatKind,
};
pub use vault::{DocumentRef, FileRecord, FsVault, MemoryVault, Vault, VaultError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
