//! `CorpusSource` backed by a directory of JSON documents

use crate::corpus::layout::{entity_path, index_path};
use crate::errors::{entity_missing, index_missing, io_error, Result};
use async_trait::async_trait;
use schemex_core::errors::ExError;
use schemex_core::model::{parse_entity_bytes, parse_index_bytes, CorpusIndex, Entity};
use schemex_core::source::CorpusSource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read-only corpus rooted at a directory
///
/// Every fetch reads from disk; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FsCorpus {
    root: PathBuf,
}

impl FsCorpus {
    /// Create a corpus source at the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Read a file, mapping absence to `Ok(None)`
async fn read_optional(operation: &str, path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(operation, path, e)),
    }
}

#[async_trait]
impl CorpusSource for FsCorpus {
    async fn fetch_index(&self) -> std::result::Result<CorpusIndex, ExError> {
        let path = index_path(&self.root);
        let bytes = read_optional("fetch_index", &path)
            .await?
            .ok_or_else(|| index_missing(&path))?;

        let index = parse_index_bytes(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            versions = index.len() as u64,
            "corpus index loaded"
        );
        Ok(index)
    }

    async fn fetch_entity(&self, version: &str, name: &str) -> std::result::Result<Entity, ExError> {
        let path = entity_path(&self.root, version, name)?;
        let bytes = read_optional("fetch_entity", &path)
            .await?
            .ok_or_else(|| entity_missing(version, name))?;

        parse_entity_bytes(&bytes).map_err(|e| e.with_entity_name(name).with_version(version))
    }
}
