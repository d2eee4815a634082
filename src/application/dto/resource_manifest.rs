use super::resource_models::{BundleModel, ClusterModel, HostModel, ProviderModel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds managed by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Bundle,
    Provider,
    Host,
    Cluster,
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bundle" => Ok(ResourceKind::Bundle),
            "provider" => Ok(ResourceKind::Provider),
            "host" => Ok(ResourceKind::Host),
            "cluster" => Ok(ResourceKind::Cluster),
            _ => Err(format!(
                "Invalid resource kind: {}. Please specify 'bundle', 'provider', 'host' or 'cluster'",
                s
            )),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Bundle => "bundle",
            ResourceKind::Provider => "provider",
            ResourceKind::Host => "host",
            ResourceKind::Cluster => "cluster",
        };
        write!(f, "{}", name)
    }
}

/// One resource definition, tagged by `kind`
///
/// ```yaml
/// kind: cluster
/// name: analytics
/// bundle_id: 5
/// hc_map:
///   host1.local:
///     - svcA: [comp1, comp2]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourceManifest {
    Bundle(BundleModel),
    Provider(ProviderModel),
    Host(HostModel),
    Cluster(ClusterModel),
}

impl ResourceManifest {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceManifest::Bundle(_) => ResourceKind::Bundle,
            ResourceManifest::Provider(_) => ResourceKind::Provider,
            ResourceManifest::Host(_) => ResourceKind::Host,
            ResourceManifest::Cluster(_) => ResourceKind::Cluster,
        }
    }
}
