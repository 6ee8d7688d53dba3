//! Helpers shared by the commands that scan the vault.

use chrono::NaiveDate;
use daylog_core::activity::{ActivityLogger, InsertOutcome};
use daylog_core::config::types::ResolvedConfig;
use daylog_core::dates::{days_between, parse_reference_date, today, DateError};
use daylog_core::vault::{DocumentRef, FsVault, MemoryVault, Vault, VaultResult};
use std::path::Path;
use tracing::error;

use crate::DateArgs;

/// Result of running an insert operation, optionally as a preview.
pub struct Execution {
    pub outcome: InsertOutcome,
    /// Text that was (or would have been) appended, for `--dry-run`.
    pub preview: Option<String>,
}

/// Collect `--date` values plus the `--from`/`--to` range; today when empty.
pub fn resolve_dates(args: &DateArgs) -> Result<Vec<NaiveDate>, DateError> {
    let mut dates = args
        .dates
        .iter()
        .map(|d| parse_reference_date(d))
        .collect::<Result<Vec<_>, _>>()?;

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        dates.extend(days_between(parse_reference_date(from)?, parse_reference_date(to)?)?);
    }

    if dates.is_empty() {
        dates.push(today());
    }
    Ok(dates)
}

pub fn dates_or_exit(args: &DateArgs) -> Vec<NaiveDate> {
    match resolve_dates(args) {
        Ok(dates) => dates,
        Err(e) => {
            error!("Invalid date: {e}");
            std::process::exit(1);
        }
    }
}

pub fn open_vault(cfg: &ResolvedConfig) -> FsVault {
    match FsVault::with_exclusions(&cfg.vault_root, cfg.excluded_folders.clone()) {
        Ok(vault) => vault,
        Err(e) => {
            error!("Failed to open vault: {e}");
            std::process::exit(1);
        }
    }
}

/// `--doc` if given, else the profile's default document.
pub fn target_document(cfg: &ResolvedConfig, doc: Option<&Path>) -> Option<DocumentRef> {
    doc.map(Path::to_path_buf).or_else(|| cfg.document.clone()).map(DocumentRef::new)
}

/// Run `op` against the vault, or against an in-memory copy when `dry_run`.
pub fn execute<F>(
    vault: &FsVault,
    document: Option<&DocumentRef>,
    dry_run: bool,
    op: F,
) -> VaultResult<Execution>
where
    F: FnOnce(&ActivityLogger<&dyn Vault>) -> VaultResult<InsertOutcome>,
{
    if !dry_run {
        let logger = ActivityLogger::new(vault as &dyn Vault);
        return Ok(Execution { outcome: op(&logger)?, preview: None });
    }

    let copy = MemoryVault::snapshot(vault, document)?;
    let current = |copy: &MemoryVault| document.and_then(|d| copy.document(d)).unwrap_or_default();

    let before = current(&copy);
    let outcome = op(&ActivityLogger::new(&copy as &dyn Vault))?;
    let after = current(&copy);

    let appended = after.strip_prefix(before.as_str()).unwrap_or(&after).to_string();
    Ok(Execution { outcome, preview: Some(appended) })
}
