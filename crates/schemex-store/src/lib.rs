//! schemex store - filesystem access to published schema corpora
//!
//! Provides:
//! - `FsCorpus`, a `CorpusSource` over a static JSON tree
//!   (`<root>/_index.json` plus `<root>/<version>/<name>.json`)
//! - Path layout and segment validation for that tree

pub mod corpus;
pub mod errors;

// Re-export key types
pub use corpus::FsCorpus;
pub use errors::Result;
