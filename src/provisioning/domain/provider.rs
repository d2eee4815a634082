use super::lenient;
use super::{ConfigMap, EntityId};
use crate::provisioning::services::entity_resolver::{describe_fields, field_matches, SearchCriteria};
use serde::{Deserialize, Serialize};

/// Infrastructure provider instantiated from a provider bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    pub bundle_id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: String,
    /// Current configuration, read from `config/current/`
    #[serde(default, skip_deserializing)]
    pub config: ConfigMap,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSearch {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub bundle_id: Option<EntityId>,
    pub description: Option<String>,
    pub state: Option<String>,
}

impl ProviderSearch {
    pub fn by_id(id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl SearchCriteria<Provider> for ProviderSearch {
    fn matches(&self, provider: &Provider) -> bool {
        field_matches(self.id.as_ref(), &provider.id)
            && field_matches(self.name.as_deref(), provider.name.as_str())
            && field_matches(self.bundle_id.as_ref(), &provider.bundle_id)
            && field_matches(self.description.as_deref(), provider.description.as_str())
            && field_matches(self.state.as_deref(), provider.state.as_str())
    }

    fn describe(&self) -> String {
        describe_fields(&[
            ("id", self.id.map(|id| id.to_string())),
            ("name", self.name.clone()),
            ("bundle_id", self.bundle_id.map(|id| id.to_string())),
            ("description", self.description.clone()),
            ("state", self.state.clone()),
        ])
    }
}

/// Request object for creating a provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSpec {
    pub name: String,
    pub description: String,
    pub bundle_id: EntityId,
    /// Overrides merged on top of the prototype's default configuration
    pub config: Option<ConfigMap>,
}
