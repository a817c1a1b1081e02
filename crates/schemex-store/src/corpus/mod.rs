//! Filesystem corpus source
//!
//! Mirrors the layout a static site serves:
//!
//! ```text
//! <root>/_index.json          {"v1": ["Ledger", "Group"], "v2": [...]}
//! <root>/v1/Ledger.json       one entity document
//! <root>/v1/Group.json
//! ```

pub mod fs_corpus;
pub mod layout;

pub use fs_corpus::FsCorpus;
pub use layout::{entity_path, index_path, INDEX_FILE};
