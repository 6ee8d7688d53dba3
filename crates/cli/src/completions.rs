//! Shell completion support with dynamic value completers.
//!
//! Completions read the user's config so profile names and target documents
//! come from the actual vault.

use clap_complete::engine::CompletionCandidate;
use daylog_core::config::loader::ConfigLoader;
use std::ffi::OsStr;

/// Complete profile names from the default config file.
pub fn complete_profiles(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");

    ConfigLoader::list_profiles(None)
        .unwrap_or_default()
        .into_iter()
        .filter(|name| name.starts_with(current_str))
        .map(CompletionCandidate::new)
        .collect()
}

/// Complete stat kinds understood by the stats table.
pub fn complete_stats(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");

    [("created", "Files created on the date"), ("modified", "Files modified on the date")]
        .into_iter()
        .filter(|(name, _)| name.starts_with(current_str))
        .map(|(name, help)| CompletionCandidate::new(name).help(Some(help.into())))
        .collect()
}

/// Complete markdown documents in the vault, relative to the vault root.
pub fn complete_documents(current: &OsStr) -> Vec<CompletionCandidate> {
    let mut completions = vec![];
    let current_str = current.to_str().unwrap_or("");

    let Ok(cfg) = ConfigLoader::load(None, None) else {
        return completions;
    };

    for entry in walkdir::WalkDir::new(&cfg.vault_root)
        .min_depth(1)
        .max_depth(5) // Limit depth for performance
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .take(100)
    {
        if let Ok(rel_path) = entry.path().strip_prefix(&cfg.vault_root) {
            let path_str = rel_path.to_string_lossy();
            if path_str.starts_with(current_str) {
                completions.push(CompletionCandidate::new(path_str.to_string()));
            }
        }
    }

    completions
}
