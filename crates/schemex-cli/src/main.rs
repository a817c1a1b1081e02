//! schemex CLI
//!
//! Command-line interface for comparing versions of a schema corpus

use clap::{Parser, Subcommand};
use schemex_core::errors::ExError;
use schemex_core::logging_facility::{self, Profile};
use schemex_core::{log_op_end, log_op_error, log_op_start};
use std::path::PathBuf;

mod commands;
mod config;

use config::{LogFormat, Overrides, Settings};

#[derive(Debug, Parser)]
#[command(name = "schemex")]
#[command(about = "schemex - Compare versions of a schema corpus", long_about = None)]
struct Cli {
    /// Config file (default: ./schemex.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Corpus root directory containing _index.json
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Emit JSON logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List versions, newest first
    Versions(commands::versions::VersionsArgs),
    /// List the entity names in one version
    Entities(commands::entities::EntitiesArgs),
    /// Show one entity's metadata and properties
    Show(commands::show::ShowArgs),
    /// Summarize added, removed and modified entities between two versions
    Compare(commands::compare::CompareArgs),
    /// Show one entity's field-level changes between two versions
    Diff(commands::diff::DiffArgs),
}

impl Commands {
    fn op_name(&self) -> &'static str {
        match self {
            Commands::Versions(_) => "cli_versions",
            Commands::Entities(_) => "cli_entities",
            Commands::Show(_) => "cli_show",
            Commands::Compare(_) => "cli_compare",
            Commands::Diff(_) => "cli_diff",
        }
    }
}

async fn run(cli: Cli) -> Result<(), ExError> {
    let file = config::load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(
        file,
        Overrides {
            corpus_root: cli.root,
            log_json: cli.log_json,
        },
    );

    logging_facility::init(match settings.log_format {
        LogFormat::Pretty => Profile::Cli,
        LogFormat::Json => Profile::Production,
    });

    let op = cli.command.op_name();
    log_op_start!(op, corpus_root = %settings.corpus_root.display());
    let start = std::time::Instant::now();

    let result = match cli.command {
        Commands::Versions(args) => commands::versions::execute(args, &settings).await,
        Commands::Entities(args) => commands::entities::execute(args, &settings).await,
        Commands::Show(args) => commands::show::execute(args, &settings).await,
        Commands::Compare(args) => commands::compare::execute(args, &settings).await,
        Commands::Diff(args) => commands::diff::execute(args, &settings).await,
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
