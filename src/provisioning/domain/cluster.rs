use super::lenient;
use super::{ConfigMap, EntityId};
use crate::provisioning::services::entity_resolver::{describe_fields, field_matches, SearchCriteria};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Service name → component names placed on one host
pub type ServiceAssignment = BTreeMap<String, Vec<String>>;

/// Desired topology: host FQDN → ordered service assignments
///
/// Hosts are visited in sorted FQDN order; assignments keep the order given.
pub type HostComponentMap = BTreeMap<String, Vec<ServiceAssignment>>;

/// Per-service configuration overrides keyed by service name
pub type ServicesConfig = BTreeMap<String, ConfigMap>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    pub bundle_id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: String,
    #[serde(default, skip_deserializing)]
    pub config: ConfigMap,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSearch {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub bundle_id: Option<EntityId>,
}

impl ClusterSearch {
    pub fn by_id(id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl SearchCriteria<Cluster> for ClusterSearch {
    fn matches(&self, cluster: &Cluster) -> bool {
        field_matches(self.id.as_ref(), &cluster.id)
            && field_matches(self.name.as_deref(), cluster.name.as_str())
            && field_matches(self.description.as_deref(), cluster.description.as_str())
            && field_matches(self.bundle_id.as_ref(), &cluster.bundle_id)
    }

    fn describe(&self) -> String {
        describe_fields(&[
            ("id", self.id.map(|id| id.to_string())),
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("bundle_id", self.bundle_id.map(|id| id.to_string())),
        ])
    }
}

/// Declarative description of a cluster to provision
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSpec {
    pub name: String,
    pub description: String,
    pub bundle_id: EntityId,
    pub cluster_config: Option<ConfigMap>,
    pub services_config: ServicesConfig,
    pub hc_map: HostComponentMap,
}

/// Component created by ADCM when its service is added to a cluster
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Component {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
}

/// One placement in the bulk `hostcomponent/` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostComponentEntry {
    pub component_id: EntityId,
    pub host_id: EntityId,
    pub service_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hc_map_decodes_terraform_shape() {
        let hc_map: HostComponentMap = serde_json::from_value(json!({
            "host2.local": [{"svcB": ["comp3"]}],
            "host1.local": [{"svcA": ["comp1", "comp2"]}, {"svcB": ["comp3"]}]
        }))
        .unwrap();

        let hosts: Vec<&String> = hc_map.keys().collect();
        assert_eq!(hosts, vec!["host1.local", "host2.local"]);
        assert_eq!(hc_map["host1.local"].len(), 2);
        assert_eq!(hc_map["host1.local"][0]["svcA"], vec!["comp1", "comp2"]);
    }

    #[test]
    fn test_host_component_entry_wire_shape() {
        let entry = HostComponentEntry {
            component_id: EntityId::new(7).unwrap(),
            host_id: EntityId::new(1).unwrap(),
            service_id: EntityId::new(3).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({"component_id": 7, "host_id": 1, "service_id": 3})
        );
    }

    #[test]
    fn test_cluster_search_by_bundle() {
        let cluster: Cluster = serde_json::from_value(json!({
            "id": 4, "name": "adpg", "description": "db", "bundle_id": 5, "state": "created"
        }))
        .unwrap();

        let search = ClusterSearch {
            bundle_id: Some(EntityId::new(5).unwrap()),
            ..Default::default()
        };
        assert!(search.matches(&cluster));
        assert!(cluster.config.is_empty());
    }
}
