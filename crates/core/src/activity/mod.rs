//! Vault activity logs and file statistics.
//!
//! [`ActivityLogger`] scans a [`Vault`](crate::vault::Vault) for files created
//! or modified on reference dates and appends the result to a document, either
//! as link lists or as a Markdown table of counts.

pub mod markdown;
mod service;
mod types;

pub use service::ActivityLogger;
pub use types::{ActivityLogOptions, FileStatsOptions, InsertOutcome, StatKind};
