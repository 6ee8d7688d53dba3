//! File stats command: append a per-date created/modified count table.

use daylog_core::activity::{FileStatsOptions, StatKind};
use daylog_core::config::types::ResolvedConfig;
use tracing::error;

use super::common::{dates_or_exit, execute, open_vault, target_document};
use super::output::print_execution;
use crate::StatsArgs;

pub fn run(cfg: &ResolvedConfig, args: &StatsArgs) {
    let dates = dates_or_exit(&args.dates);
    let vault = open_vault(cfg);
    let document = target_document(cfg, args.doc.as_deref());

    let stats = if args.stats.is_empty() {
        cfg.output.stat_kinds()
    } else {
        args.stats.iter().map(|s| StatKind::from(s.as_str())).collect()
    };

    let options =
        FileStatsOptions { stats, dates, document: document.clone(), all_time: args.all_time };

    let execution = match execute(&vault, document.as_ref(), args.dry_run, |logger| {
        logger.insert_file_stats(&options)
    }) {
        Ok(execution) => execution,
        Err(e) => {
            error!("Failed to insert file stats: {e}");
            std::process::exit(1);
        }
    };

    print_execution(document.as_ref(), &execution, args.json, |created, modified| {
        format!("Appended file stats ({created} created, {modified} modified)")
    });
}
