//! Subcommand implementations

use clap::ValueEnum;
use schemex_core::errors::{ExError, ExErrorKind};
use serde::Serialize;

pub mod compare;
pub mod diff;
pub mod entities;
pub mod show;
pub mod versions;

/// Output rendering for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown summary
    #[default]
    Text,
    /// Pretty-printed JSON of the structured result
    Json,
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("render_json")
            .with_message(e.to_string())
    })
}
