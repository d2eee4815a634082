pub mod config_merge;
pub mod entity_resolver;

pub use config_merge::{deep_merge, merged};
pub use entity_resolver::{EntityResolver, SearchCriteria};
