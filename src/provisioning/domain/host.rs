use super::lenient;
use super::{ConfigMap, EntityId};
use crate::provisioning::services::entity_resolver::{describe_fields, field_matches, SearchCriteria};
use serde::{Deserialize, Serialize};

/// A machine registered under a provider, optionally attached to a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub fqdn: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    pub provider_id: EntityId,
    #[serde(default)]
    pub cluster_id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: String,
    #[serde(default, skip_deserializing)]
    pub config: ConfigMap,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSearch {
    pub id: Option<EntityId>,
    pub fqdn: Option<String>,
    pub description: Option<String>,
    pub provider_id: Option<EntityId>,
    pub cluster_id: Option<EntityId>,
}

impl HostSearch {
    pub fn by_id(id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn by_fqdn(fqdn: impl Into<String>) -> Self {
        Self {
            fqdn: Some(fqdn.into()),
            ..Default::default()
        }
    }
}

impl SearchCriteria<Host> for HostSearch {
    fn matches(&self, host: &Host) -> bool {
        field_matches(self.id.as_ref(), &host.id)
            && field_matches(self.fqdn.as_deref(), host.fqdn.as_str())
            && field_matches(self.description.as_deref(), host.description.as_str())
            && field_matches(self.provider_id.as_ref(), &host.provider_id)
            && self
                .cluster_id
                .map_or(true, |cluster_id| host.cluster_id == Some(cluster_id))
    }

    fn describe(&self) -> String {
        describe_fields(&[
            ("id", self.id.map(|id| id.to_string())),
            ("fqdn", self.fqdn.clone()),
            ("description", self.description.clone()),
            ("provider_id", self.provider_id.map(|id| id.to_string())),
            ("cluster_id", self.cluster_id.map(|id| id.to_string())),
        ])
    }
}

/// Request object for creating a host
#[derive(Debug, Clone, PartialEq)]
pub struct HostSpec {
    pub fqdn: String,
    pub description: String,
    pub provider_id: EntityId,
    /// Cluster to attach the host to right after creation
    pub cluster_id: Option<EntityId>,
    pub config: Option<ConfigMap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn host(cluster_id: serde_json::Value) -> Host {
        serde_json::from_value(json!({
            "id": 11,
            "fqdn": "host1.local",
            "description": "",
            "provider_id": 2,
            "cluster_id": cluster_id,
            "state": "created"
        }))
        .unwrap()
    }

    #[test]
    fn test_unattached_host_has_no_cluster() {
        assert_eq!(host(json!(null)).cluster_id, None);
    }

    #[test]
    fn test_cluster_filter_requires_attachment() {
        let search = HostSearch {
            cluster_id: Some(EntityId::new(4).unwrap()),
            ..Default::default()
        };
        assert!(!search.matches(&host(json!(null))));
        assert!(search.matches(&host(json!(4))));
        assert!(!search.matches(&host(json!(5))));
    }

    #[test]
    fn test_by_fqdn() {
        assert!(HostSearch::by_fqdn("host1.local").matches(&host(json!(null))));
        assert!(!HostSearch::by_fqdn("host1").matches(&host(json!(null))));
    }
}
