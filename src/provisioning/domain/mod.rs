pub mod bundle;
pub mod cluster;
pub mod entity_id;
pub mod host;
pub(crate) mod lenient;
pub mod provider;

pub use bundle::{Bundle, BundleSearch, BundleSpec};
pub use cluster::{
    Cluster, ClusterSearch, ClusterSpec, Component, HostComponentEntry, HostComponentMap,
    ServiceAssignment, ServicesConfig,
};
pub use entity_id::{Created, EntityId};
pub use host::{Host, HostSearch, HostSpec};
pub use provider::{Provider, ProviderSearch, ProviderSpec};

/// Semi-structured configuration tree (string keys, arbitrary JSON values)
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
