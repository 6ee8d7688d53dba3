mod cmd;
mod completions;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::env::CompleteEnv;
use daylog_core::config::loader::{ConfigError, ConfigLoader};
use daylog_core::config::types::ResolvedConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "daylog",
    version,
    about = "Append vault activity logs and file statistics to markdown notes"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, add = ArgValueCompleter::new(completions::complete_profiles))]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Append links to files created or modified on the given dates
    Log(LogArgs),

    /// Append a table of created/modified file counts per date
    Stats(StatsArgs),

    /// List files created or modified on the given dates without writing anything
    Scan(ScanArgs),
}

/// Reference date selection shared by all scanning commands.
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Reference date (YYYY-MM-DD, today, yesterday, "today - 3d"). Repeatable.
    #[arg(long = "date", value_name = "DATE")]
    pub dates: Vec<String>,

    /// First day of an inclusive range
    #[arg(long, value_name = "DATE", requires = "to")]
    pub from: Option<String>,

    /// Last day of an inclusive range
    #[arg(long, value_name = "DATE", requires = "from")]
    pub to: Option<String>,
}

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(flatten)]
    pub dates: DateArgs,

    /// List files created on the dates
    #[arg(long)]
    pub created: bool,

    /// List files modified on the dates (skipping those already listed as created)
    #[arg(long)]
    pub modified: bool,

    /// Target document, relative to the vault root
    #[arg(long, add = ArgValueCompleter::new(completions::complete_documents))]
    pub doc: Option<PathBuf>,

    /// Write bare paths instead of [[wiki links]]
    #[arg(long)]
    pub plain: bool,

    /// Put a heading above each list
    #[arg(long)]
    pub headers: bool,

    /// Print what would be appended instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dates: DateArgs,

    /// Table column ("created", "modified"). Repeatable.
    #[arg(
        long = "stat",
        value_name = "KIND",
        add = ArgValueCompleter::new(completions::complete_stats)
    )]
    pub stats: Vec<String>,

    /// One row for every day with any activity, ignoring --date/--from/--to
    #[arg(long)]
    pub all_time: bool,

    /// Target document, relative to the vault root
    #[arg(long, add = ArgValueCompleter::new(completions::complete_documents))]
    pub doc: Option<PathBuf>,

    /// Print what would be appended instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub dates: DateArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref());
    let _log_guard = loaded.as_ref().ok().and_then(logging::init);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), loaded),
        Commands::Log(args) => cmd::log::run(&require_config(loaded), &args),
        Commands::Stats(args) => cmd::stats::run(&require_config(loaded), &args),
        Commands::Scan(args) => cmd::scan::run(&require_config(loaded), &args),
    }
}

fn require_config(loaded: Result<ResolvedConfig, ConfigError>) -> ResolvedConfig {
    match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}
