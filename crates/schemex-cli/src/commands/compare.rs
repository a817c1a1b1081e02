//! Compare command
//!
//! Usage: schemex compare [--from <V>] [--to <V>] [--concurrency <N>] [--format text|json]
//!
//! Without `--from`/`--to` the two newest versions are compared.

use crate::commands::{to_json, OutputFormat};
use crate::config::Settings;
use clap::Args;
use schemex_core::errors::{ExError, ExErrorKind};
use schemex_core::reconcile::{reconcile_versions, render_change_set_summary, ReconcileOptions};
use schemex_core::source::CorpusSource;
use schemex_core_types::RequestContext;
use schemex_store::FsCorpus;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Older version (default: second-newest)
    #[arg(long)]
    pub from: Option<String>,

    /// Newer version (default: newest)
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum entity comparisons in flight (default: unbounded)
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn execute(args: CompareArgs, settings: &Settings) -> Result<(), ExError> {
    let corpus = FsCorpus::new(&settings.corpus_root);
    let (from, to) = resolve_pair(&corpus, args.from, args.to).await?;

    let mut options = ReconcileOptions {
        context: RequestContext::new(),
        ..Default::default()
    };
    if let Some(limit) = args.concurrency.or(settings.max_concurrency) {
        options = options.with_max_concurrency(limit);
    }

    let comparison = reconcile_versions(&corpus, &from, &to, &options).await?;

    match args.format {
        OutputFormat::Text => print!("{}", render_change_set_summary(&comparison)),
        OutputFormat::Json => println!("{}", to_json(&comparison)?),
    }

    Ok(())
}

/// Fill in whichever side was not given from the index's default pair
async fn resolve_pair(
    corpus: &FsCorpus,
    from: Option<String>,
    to: Option<String>,
) -> Result<(String, String), ExError> {
    if let (Some(from), Some(to)) = (&from, &to) {
        return Ok((from.clone(), to.clone()));
    }

    let index = corpus.fetch_index().await?;
    let (default_from, default_to) = index.default_comparison().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op("compare")
            .with_message("corpus needs at least two versions to pick a default comparison")
    })?;

    Ok((
        from.unwrap_or_else(|| default_from.to_string()),
        to.unwrap_or_else(|| default_to.to_string()),
    ))
}
