//! Activity log command: append created/modified link lists to a document.

use daylog_core::activity::ActivityLogOptions;
use daylog_core::config::types::ResolvedConfig;
use tracing::{error, warn};

use super::common::{dates_or_exit, execute, open_vault, target_document};
use super::output::print_execution;
use crate::LogArgs;

pub fn run(cfg: &ResolvedConfig, args: &LogArgs) {
    let dates = dates_or_exit(&args.dates);
    let vault = open_vault(cfg);
    let document = target_document(cfg, args.doc.as_deref());

    if !args.created && !args.modified {
        warn!("neither --created nor --modified given; the document is rewritten unchanged");
    }

    let options = ActivityLogOptions {
        insert_created: args.created,
        insert_modified: args.modified,
        dates,
        document: document.clone(),
        make_link: cfg.output.make_link && !args.plain,
        section_headers: cfg.output.section_headers || args.headers,
    };

    let execution = match execute(&vault, document.as_ref(), args.dry_run, |logger| {
        logger.insert_activity_log(&options)
    }) {
        Ok(execution) => execution,
        Err(e) => {
            error!("Failed to insert activity log: {e}");
            std::process::exit(1);
        }
    };

    print_execution(document.as_ref(), &execution, args.json, |created, modified| {
        format!("Appended {created} created and {modified} modified entries")
    });
}
