//! Corpus fetch seam.
//!
//! The change engine performs no I/O; callers hand it a [`CorpusSource`]
//! that knows how to load the version index and individual entity
//! documents. `schemex-store` provides the filesystem implementation.

use crate::errors::{ExError, SchemexError};
use crate::model::{CorpusIndex, Entity};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Read-only access to a versioned entity corpus.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Load the version → entity-name index.
    async fn fetch_index(&self) -> Result<CorpusIndex, ExError>;

    /// Load one entity document as published in `version`.
    ///
    /// Implementations report absence as `NotFound` and unreadable
    /// documents as `InvalidEntity`/`MissingField`, so callers can tell an
    /// expected gap from a data problem.
    async fn fetch_entity(&self, version: &str, name: &str) -> Result<Entity, ExError>;
}

/// In-memory corpus, for embedding and tests.
///
/// Entities are stored per version independently of the index, so an index
/// may list names that have no document (mirroring a static site with a
/// missing file).
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    index: CorpusIndex,
    entities: BTreeMap<(String, String), Entity>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a version: its index entry lists every entity given, in order.
    pub fn with_version<I>(mut self, version: &str, entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        let entities: Vec<Entity> = entities.into_iter().collect();
        self.index
            .insert_version(version, entities.iter().map(|e| e.name.clone()));
        for entity in entities {
            self.entities
                .insert((version.to_string(), entity.name.clone()), entity);
        }
        self
    }

    /// Store a document under an explicit lookup name without touching the index.
    pub fn with_document(mut self, version: &str, lookup_name: &str, entity: Entity) -> Self {
        self.entities
            .insert((version.to_string(), lookup_name.to_string()), entity);
        self
    }

    /// Overwrite a version's index entry without touching stored documents.
    pub fn with_index_entry<I, S>(mut self, version: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index.insert_version(version, names);
        self
    }
}

#[async_trait]
impl CorpusSource for MemoryCorpus {
    async fn fetch_index(&self) -> Result<CorpusIndex, ExError> {
        Ok(self.index.clone())
    }

    async fn fetch_entity(&self, version: &str, name: &str) -> Result<Entity, ExError> {
        self.entities
            .get(&(version.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| {
                ExError::from(SchemexError::EntityNotFound {
                    version: version.to_string(),
                    name: name.to_string(),
                })
                .with_op("fetch_entity")
            })
    }
}
