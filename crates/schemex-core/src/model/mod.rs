pub mod corpus;
pub mod entity;
pub mod version;
pub mod view;

pub use corpus::{parse_index_bytes, CorpusIndex};
pub use entity::{parse_entity_bytes, Entity, Meta, Property};
pub use version::compare_versions;
pub use view::render_entity_view;
