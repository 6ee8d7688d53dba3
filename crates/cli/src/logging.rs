//! Tracing setup: a stderr layer plus an optional non-blocking file layer.

use daylog_core::config::types::{LoggingConfig, ResolvedConfig};
use std::fs::{self, File};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber.
///
/// The returned guard flushes the file layer when dropped; hold it until exit.
pub fn init(cfg: &ResolvedConfig) -> Option<WorkerGuard> {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(env_filter(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let file = match open_log_file(&cfg.logging) {
        Ok(Some(file)) => file,
        Ok(None) => {
            registry.init();
            return None;
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let file_level = parse_level(file_level_name(&cfg.logging)).unwrap_or(LevelFilter::DEBUG);
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(file_level));

    registry.with(file_layer).init();
    Some(guard)
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

fn file_level_name(logging: &LoggingConfig) -> &str {
    logging.file_level.as_deref().unwrap_or(&logging.level)
}

fn open_log_file(logging: &LoggingConfig) -> Result<Option<File>, String> {
    let Some(path) = logging.file.as_ref() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            format!("Failed to create log directory {}: {}", parent.display(), e)
        })?;
    }

    File::create(path)
        .map(Some)
        .map_err(|e| format!("Failed to create log file {}: {}", path.display(), e))
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
