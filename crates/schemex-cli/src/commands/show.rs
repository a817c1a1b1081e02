//! Show command
//!
//! Usage: schemex show <VERSION> <NAME> [--format text|json]

use crate::commands::{to_json, OutputFormat};
use crate::config::Settings;
use clap::Args;
use schemex_core::errors::{ExError, SchemexError};
use schemex_core::model::render_entity_view;
use schemex_core::source::CorpusSource;
use schemex_store::FsCorpus;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Version to read from
    pub version: String,

    /// Entity name
    pub name: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Print one entity's metadata and properties
pub async fn execute(args: ShowArgs, settings: &Settings) -> Result<(), ExError> {
    let corpus = FsCorpus::new(&settings.corpus_root);

    let index = corpus.fetch_index().await?;
    if !index.contains_version(&args.version) {
        return Err(ExError::from(SchemexError::VersionNotFound {
            version: args.version,
        })
        .with_op("show"));
    }

    let entity = corpus.fetch_entity(&args.version, &args.name).await?;

    match args.format {
        OutputFormat::Text => print!("{}", render_entity_view(&args.version, &entity)),
        OutputFormat::Json => println!("{}", to_json(&entity)?),
    }

    Ok(())
}
