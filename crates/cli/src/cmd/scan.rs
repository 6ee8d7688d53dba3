//! Scan command: list files created or modified on the given dates.

use chrono::NaiveDate;
use daylog_core::config::types::ResolvedConfig;
use daylog_core::vault::{FileRecord, Vault};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use tracing::error;

use super::common::{dates_or_exit, open_vault};
use crate::ScanArgs;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Row for the scan table and JSON output.
#[derive(Debug, Serialize, Tabled, PartialEq, Eq)]
struct ScanRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Modified")]
    modified: String,
}

/// Run the scan command.
pub fn run(cfg: &ResolvedConfig, args: &ScanArgs) {
    let dates = dates_or_exit(&args.dates);
    let vault = open_vault(cfg);

    let files = match vault.list_files() {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to scan vault: {e}");
            std::process::exit(1);
        }
    };

    let rows = scan_rows(&files, &dates);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).unwrap_or_default());
        return;
    }

    if rows.is_empty() {
        println!("(no activity found)");
        return;
    }

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!();
    println!("-- {} entries --", rows.len());
}

/// One row per (date, file) pair with activity, dates in the given order.
fn scan_rows(files: &[FileRecord], dates: &[NaiveDate]) -> Vec<ScanRow> {
    let mut rows = Vec::new();

    for date in dates {
        for file in files {
            let activity = match (file.created_on(*date), file.modified_on(*date)) {
                (true, true) => "created, modified",
                (true, false) => "created",
                (false, true) => "modified",
                (false, false) => continue,
            };

            rows.push(ScanRow {
                date: date.format("%Y-%m-%d").to_string(),
                path: file.path.clone(),
                activity: activity.to_string(),
                created: file.created.format(TIMESTAMP_FORMAT).to_string(),
                modified: file.modified.format(TIMESTAMP_FORMAT).to_string(),
            });
        }
    }

    rows
}
