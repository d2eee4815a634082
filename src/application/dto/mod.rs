/// Data Transfer Objects for application layer
///
/// DTOs carry user-facing resource definitions into the application layer
/// and provisioning reports back out, keeping the domain layer isolated.
mod provisioning_log;
mod resource_manifest;
mod resource_models;

pub use provisioning_log::ProvisioningLog;
pub use resource_manifest::{ResourceKind, ResourceManifest};
pub use resource_models::{BundleModel, ClusterModel, HostModel, ProviderModel};
