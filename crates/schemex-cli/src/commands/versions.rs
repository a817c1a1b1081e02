//! Versions command
//!
//! Usage: schemex versions [--format text|json]

use crate::commands::{to_json, OutputFormat};
use crate::config::Settings;
use clap::Args;
use schemex_core::errors::ExError;
use schemex_core::source::CorpusSource;
use schemex_store::FsCorpus;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct VersionsArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct VersionEntry<'a> {
    version: &'a str,
    entities: usize,
}

/// List published versions, newest first, with their entity counts
pub async fn execute(args: VersionsArgs, settings: &Settings) -> Result<(), ExError> {
    let corpus = FsCorpus::new(&settings.corpus_root);
    let index = corpus.fetch_index().await?;

    let entries: Vec<VersionEntry<'_>> = index
        .versions_newest_first()
        .into_iter()
        .map(|version| VersionEntry {
            version,
            entities: index.entity_names(version).map_or(0, <[String]>::len),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}\t{} entities", entry.version, entry.entities);
            }
        }
        OutputFormat::Json => println!("{}", to_json(&entries)?),
    }

    Ok(())
}
