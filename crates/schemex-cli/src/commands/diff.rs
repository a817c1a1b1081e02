//! Diff command
//!
//! Usage: schemex diff --from <V> --to <V> <NAME> [--format text|json]

use crate::commands::{to_json, OutputFormat};
use crate::config::Settings;
use clap::Args;
use schemex_core::diff::render_entity_summary;
use schemex_core::errors::ExError;
use schemex_core::reconcile::diff_entity_versions;
use schemex_store::FsCorpus;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Entity name to compare
    pub name: String,

    #[arg(long)]
    pub from: String,

    #[arg(long)]
    pub to: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn execute(args: DiffArgs, settings: &Settings) -> Result<(), ExError> {
    let corpus = FsCorpus::new(&settings.corpus_root);
    let diff = diff_entity_versions(&corpus, &args.from, &args.to, &args.name).await?;

    match args.format {
        OutputFormat::Text => print!(
            "{}",
            render_entity_summary(&args.name, &args.from, &args.to, &diff)
        ),
        OutputFormat::Json => println!("{}", to_json(&diff)?),
    }

    Ok(())
}
