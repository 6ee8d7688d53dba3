use daylog_core::config::loader::{default_config_path, ConfigError};
use daylog_core::config::types::ResolvedConfig;
use daylog_core::vault::VaultWalker;
use std::path::Path;

pub fn run(config: Option<&Path>, loaded: Result<ResolvedConfig, ConfigError>) {
    match loaded {
        Ok(rc) => {
            println!("OK   daylog doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!(
                "vault_status: {}",
                if VaultWalker::new(&rc.vault_root).is_ok() { "ok" } else { "missing" }
            );
            println!("excluded_folders: {}", join_paths(&rc.excluded_folders));
            println!(
                "document: {}",
                rc.document.as_ref().map_or("(none)".to_string(), |d| d.display().to_string())
            );
            println!("logging.level: {}", rc.logging.level);
            println!("output.make_link: {}", rc.output.make_link);
            println!("output.section_headers: {}", rc.output.section_headers);
            println!("output.stats: {}", rc.output.stats.join(", "));
        }
        Err(e) => {
            println!("FAIL daylog doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

fn join_paths(paths: &[std::path::PathBuf]) -> String {
    if paths.is_empty() {
        return "(none)".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
