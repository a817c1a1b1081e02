//! Entities command
//!
//! Usage: schemex entities <VERSION> [--filter <TEXT>] [--format text|json]

use crate::commands::{to_json, OutputFormat};
use crate::config::Settings;
use clap::Args;
use schemex_core::errors::{ExError, SchemexError};
use schemex_core::source::CorpusSource;
use schemex_store::FsCorpus;

#[derive(Debug, Args)]
pub struct EntitiesArgs {
    /// Version to list
    pub version: String,

    /// Keep only names containing this text (case-insensitive)
    #[arg(long, default_value = "")]
    pub filter: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// List the entity names published in one version, sorted by name
pub async fn execute(args: EntitiesArgs, settings: &Settings) -> Result<(), ExError> {
    let corpus = FsCorpus::new(&settings.corpus_root);
    let index = corpus.fetch_index().await?;

    let names = index
        .matching_entity_names(&args.version, &args.filter)
        .ok_or_else(|| {
            ExError::from(SchemexError::VersionNotFound {
                version: args.version.clone(),
            })
            .with_op("entities")
        })?;

    match args.format {
        OutputFormat::Text => {
            for name in &names {
                println!("{}", name);
            }
        }
        OutputFormat::Json => println!("{}", to_json(&names)?),
    }

    Ok(())
}
