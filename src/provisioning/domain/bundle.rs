use super::lenient;
use super::EntityId;
use crate::provisioning::services::entity_resolver::{describe_fields, field_matches, SearchCriteria};
use serde::{Deserialize, Serialize};

/// Installable package defining cluster, provider, service and component prototypes
///
/// Bundles are immutable once loaded; they can only be uploaded and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub edition: String,
    /// License acceptance state reported by ADCM ("absent", "accepted", ...)
    #[serde(default, deserialize_with = "lenient::string")]
    pub license: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleSearch {
    pub id: Option<EntityId>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub edition: Option<String>,
    pub license: Option<String>,
    pub version: Option<String>,
}

impl BundleSearch {
    pub fn by_id(id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl SearchCriteria<Bundle> for BundleSearch {
    fn matches(&self, bundle: &Bundle) -> bool {
        field_matches(self.id.as_ref(), &bundle.id)
            && field_matches(self.name.as_deref(), bundle.name.as_str())
            && field_matches(self.display_name.as_deref(), bundle.display_name.as_str())
            && field_matches(self.description.as_deref(), bundle.description.as_str())
            && field_matches(self.edition.as_deref(), bundle.edition.as_str())
            && field_matches(self.license.as_deref(), bundle.license.as_str())
            && field_matches(self.version.as_deref(), bundle.version.as_str())
    }

    fn describe(&self) -> String {
        describe_fields(&[
            ("id", self.id.map(|id| id.to_string())),
            ("name", self.name.clone()),
            ("display_name", self.display_name.clone()),
            ("description", self.description.clone()),
            ("edition", self.edition.clone()),
            ("license", self.license.clone()),
            ("version", self.version.clone()),
        ])
    }
}

/// Request object for loading a bundle from an archive URL
#[derive(Debug, Clone, PartialEq)]
pub struct BundleSpec {
    pub url: String,
}
