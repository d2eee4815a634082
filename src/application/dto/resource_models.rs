//! User-facing resource models and their mapping to request objects.
//!
//! Models mirror the attributes a user writes in a manifest. Identifiers of
//! `0` and empty strings mean "not set"; configuration-like attributes are
//! JSON documents carried as text.

use crate::provisioning::domain::{
    Bundle, BundleSearch, BundleSpec, Cluster, ClusterSearch, ClusterSpec, ConfigMap, EntityId,
    Host, HostComponentMap, HostSearch, HostSpec, Provider, ProviderSearch, ProviderSpec,
    ServicesConfig,
};
use crate::shared::error::AdcmError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accepts a JSON document either as text or as inline structured data
fn json_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(structured) => Ok(structured.to_string()),
    }
}

fn optional_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn optional_id(value: i64, attribute: &str) -> Result<Option<EntityId>> {
    if value == 0 {
        return Ok(None);
    }
    required_id(value, attribute).map(Some)
}

fn required_id(value: i64, attribute: &str) -> Result<EntityId> {
    if value <= 0 {
        return Err(AdcmError::validation(format!(
            "{} must be a positive identifier, got {}",
            attribute, value
        )));
    }
    EntityId::new(value)
}

fn required_text(value: &str, attribute: &str) -> Result<String> {
    optional_text(value)
        .ok_or_else(|| AdcmError::validation(format!("{} must not be empty", attribute)))
}

fn parse_json<T: DeserializeOwned>(text: &str, attribute: &str) -> Result<Option<T>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| AdcmError::validation(format!("{} is not valid JSON: {}", attribute, e)))
}

fn config_text(config: &ConfigMap) -> String {
    if config.is_empty() {
        String::new()
    } else {
        Value::Object(config.clone()).to_string()
    }
}

fn parse_services_config(text: &str) -> Result<ServicesConfig> {
    let Some(raw) = parse_json::<serde_json::Map<String, Value>>(text, "services_config")? else {
        return Ok(ServicesConfig::new());
    };

    raw.into_iter()
        .map(|(service, value)| match value {
            Value::Object(config) => Ok((service, config)),
            other => Err(AdcmError::validation(format!(
                "services_config entry '{}' must be a JSON object, got {}",
                service, other
            ))),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub bundle_id: i64,
    pub state: String,
    #[serde(deserialize_with = "json_text")]
    pub cluster_config: String,
    #[serde(deserialize_with = "json_text")]
    pub services_config: String,
    #[serde(deserialize_with = "json_text")]
    pub hc_map: String,
}

impl ClusterModel {
    pub fn to_spec(&self) -> Result<ClusterSpec> {
        Ok(ClusterSpec {
            name: required_text(&self.name, "name")?,
            description: self.description.clone(),
            bundle_id: required_id(self.bundle_id, "bundle_id")?,
            cluster_config: parse_json(&self.cluster_config, "cluster_config")?,
            services_config: parse_services_config(&self.services_config)?,
            hc_map: parse_json::<HostComponentMap>(&self.hc_map, "hc_map")?.unwrap_or_default(),
        })
    }

    pub fn to_search(&self) -> Result<ClusterSearch> {
        Ok(ClusterSearch {
            id: optional_id(self.id, "id")?,
            name: optional_text(&self.name),
            description: optional_text(&self.description),
            bundle_id: optional_id(self.bundle_id, "bundle_id")?,
        })
    }

    /// Model for `cluster`; services config and topology are not read back
    /// from ADCM and are kept from `requested`
    pub fn from_entity(cluster: &Cluster, requested: &ClusterModel) -> Self {
        Self {
            id: cluster.id.get(),
            name: cluster.name.clone(),
            description: cluster.description.clone(),
            bundle_id: cluster.bundle_id.get(),
            state: cluster.state.clone(),
            cluster_config: config_text(&cluster.config),
            services_config: requested.services_config.clone(),
            hc_map: requested.hc_map.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostModel {
    pub id: i64,
    pub fqdn: String,
    pub description: String,
    pub provider_id: i64,
    pub cluster_id: i64,
    pub state: String,
    #[serde(deserialize_with = "json_text")]
    pub config: String,
}

impl HostModel {
    pub fn to_spec(&self) -> Result<HostSpec> {
        Ok(HostSpec {
            fqdn: required_text(&self.fqdn, "fqdn")?,
            description: self.description.clone(),
            provider_id: required_id(self.provider_id, "provider_id")?,
            cluster_id: optional_id(self.cluster_id, "cluster_id")?,
            config: parse_json(&self.config, "config")?,
        })
    }

    pub fn to_search(&self) -> Result<HostSearch> {
        Ok(HostSearch {
            id: optional_id(self.id, "id")?,
            fqdn: optional_text(&self.fqdn),
            description: optional_text(&self.description),
            provider_id: optional_id(self.provider_id, "provider_id")?,
            cluster_id: optional_id(self.cluster_id, "cluster_id")?,
        })
    }

    pub fn from_entity(host: &Host) -> Self {
        Self {
            id: host.id.get(),
            fqdn: host.fqdn.clone(),
            description: host.description.clone(),
            provider_id: host.provider_id.get(),
            cluster_id: host.cluster_id.map_or(0, EntityId::get),
            state: host.state.clone(),
            config: config_text(&host.config),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub bundle_id: i64,
    pub state: String,
    #[serde(deserialize_with = "json_text")]
    pub config: String,
}

impl ProviderModel {
    pub fn to_spec(&self) -> Result<ProviderSpec> {
        Ok(ProviderSpec {
            name: required_text(&self.name, "name")?,
            description: self.description.clone(),
            bundle_id: required_id(self.bundle_id, "bundle_id")?,
            config: parse_json(&self.config, "config")?,
        })
    }

    pub fn to_search(&self) -> Result<ProviderSearch> {
        Ok(ProviderSearch {
            id: optional_id(self.id, "id")?,
            name: optional_text(&self.name),
            bundle_id: optional_id(self.bundle_id, "bundle_id")?,
            description: optional_text(&self.description),
            state: optional_text(&self.state),
        })
    }

    pub fn from_entity(provider: &Provider) -> Self {
        Self {
            id: provider.id.get(),
            name: provider.name.clone(),
            description: provider.description.clone(),
            bundle_id: provider.bundle_id.get(),
            state: provider.state.clone(),
            config: config_text(&provider.config),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleModel {
    pub id: i64,
    /// Download location of the bundle archive
    pub url: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub edition: String,
    pub license: String,
    pub version: String,
}

impl BundleModel {
    pub fn to_spec(&self) -> Result<BundleSpec> {
        Ok(BundleSpec {
            url: required_text(&self.url, "url")?,
        })
    }

    pub fn to_search(&self) -> Result<BundleSearch> {
        Ok(BundleSearch {
            id: optional_id(self.id, "id")?,
            name: optional_text(&self.name),
            display_name: optional_text(&self.display_name),
            description: optional_text(&self.description),
            edition: optional_text(&self.edition),
            license: optional_text(&self.license),
            version: optional_text(&self.version),
        })
    }

    /// Model for `bundle`; the archive URL is not known to ADCM and is kept
    /// from `url`
    pub fn from_entity(bundle: &Bundle, url: &str) -> Self {
        Self {
            id: bundle.id.get(),
            url: url.to_string(),
            name: bundle.name.clone(),
            display_name: bundle.display_name.clone(),
            description: bundle.description.clone(),
            edition: bundle.edition.clone(),
            license: bundle.license.clone(),
            version: bundle.version.clone(),
        }
    }
}
