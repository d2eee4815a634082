/// Use cases module containing application business logic orchestration
mod bundle_client;
pub(crate) mod cluster_client;
mod host_client;
mod manage_resources;
mod prototype_catalog;
mod provider_client;
mod provision_cluster;

pub use bundle_client::BundleClient;
pub use cluster_client::ClusterClient;
pub use host_client::HostClient;
pub use manage_resources::{reject_update, ManageResourcesUseCase};
pub use prototype_catalog::PrototypeCatalog;
pub use provider_client::ProviderClient;
pub use provision_cluster::ProvisionClusterUseCase;
