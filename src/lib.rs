//! adcm-provider - provisioning client for ADCM (Arenadata Cluster Manager)
//!
//! This library manages ADCM bundles, host providers, hosts and clusters,
//! including cluster provisioning with a host-component map, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`provisioning`): Entities, search criteria, config merging
//! - **Application Layer** (`application`): ADCM session, entity clients and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use adcm_provider::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let transport = HttpAdcmTransport::connect(
//!     "http://127.0.0.1:8000",
//!     "admin",
//!     "admin",
//!     Duration::from_secs(30),
//! )?;
//! let api = AdcmApi::new(transport);
//!
//! let search = HostSearch {
//!     fqdn: Some("host1.local".to_string()),
//!     ..Default::default()
//! };
//! let host = HostClient::new(&api).read(&search)?;
//! println!("{} is {}", host.fqdn, host.state);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod provisioning;
pub mod shared;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrDiagnosticSink, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::ManifestReader;
    pub use crate::adapters::outbound::network::{HttpAdcmTransport, HttpBundleSource};
    pub use crate::application::dto::{
        BundleModel, ClusterModel, HostModel, ProviderModel, ProvisioningLog, ResourceKind,
        ResourceManifest,
    };
    pub use crate::application::use_cases::{
        BundleClient, ClusterClient, HostClient, ManageResourcesUseCase, ProviderClient,
        ProvisionClusterUseCase,
    };
    pub use crate::application::AdcmApi;
    pub use crate::ports::inbound::ResourceLifecycle;
    pub use crate::ports::outbound::{
        AdcmTransport, ApiMethod, ApiRequest, BundleArchive, BundleSource, Diagnostic,
        DiagnosticSink, ProgressReporter, RequestBody,
    };
    pub use crate::provisioning::domain::{
        Bundle, BundleSearch, Cluster, ClusterSearch, ClusterSpec, EntityId, Host, HostSearch,
        HostSpec, Provider, ProviderSearch, ProviderSpec,
    };
    pub use crate::provisioning::policies::ReadinessPolicy;
    pub use crate::shared::{AdcmError, CancelSignal, Result};
}
