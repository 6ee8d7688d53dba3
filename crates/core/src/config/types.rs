use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::activity::StatKind;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folders to exclude from vault scans (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    /// Default target document when none is given on the command line.
    #[serde(default)]
    pub document: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Defaults for generated Markdown.
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Emit `[[path]]` wiki links (default: true)
    #[serde(default = "default_make_link")]
    pub make_link: bool,
    /// Put `## Created` / `## Modified` headings above link lists (default: false)
    #[serde(default)]
    pub section_headers: bool,
    /// Stats table columns (default: created, modified)
    #[serde(default = "default_stats")]
    pub stats: Vec<String>,
}

impl OutputConfig {
    pub fn stat_kinds(&self) -> Vec<StatKind> {
        self.stats.iter().map(|s| StatKind::from(s.as_str())).collect()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { make_link: default_make_link(), section_headers: false, stats: default_stats() }
    }
}

fn default_make_link() -> bool {
    true
}

fn default_stats() -> Vec<String> {
    vec!["created".to_string(), "modified".to_string()]
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    /// Folders to exclude from vault scans.
    pub excluded_folders: Vec<PathBuf>,
    pub document: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}
