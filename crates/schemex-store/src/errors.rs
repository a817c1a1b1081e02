//! Error handling for schemex-store
//!
//! Wraps schemex-core ExError with store-specific helpers

use schemex_core::errors::{ExError, ExErrorKind, SchemexError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(format!("{}: {}", path.display(), err))
}

/// Create a missing index error
pub fn index_missing(path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("fetch_index")
        .with_message(format!("corpus index not found at {}", path.display()))
}

/// Create a missing entity document error
pub fn entity_missing(version: &str, name: &str) -> ExError {
    ExError::from(SchemexError::EntityNotFound {
        version: version.to_string(),
        name: name.to_string(),
    })
    .with_op("fetch_entity")
}

/// Create an error for an entity name that cannot be used as a file name
pub fn invalid_entity_name(name: &str) -> ExError {
    ExError::from(SchemexError::InvalidEntityName {
        name: name.to_string(),
    })
    .with_op("fetch_entity")
}

/// Create an error for a version id that cannot be used as a directory name
pub fn invalid_version(version: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("fetch_entity")
        .with_version(version.to_string())
        .with_message("Version id must be a single path segment")
}
