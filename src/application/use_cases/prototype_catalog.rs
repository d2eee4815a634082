use crate::application::api::AdcmApi;
use crate::application::endpoints;
use crate::ports::outbound::AdcmTransport;
use crate::provisioning::domain::{Component, EntityId};
use crate::shared::error::AdcmError;
use crate::shared::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Prototype {
    id: EntityId,
}

/// PrototypeCatalog - Lookups in the bundle-defined prototype catalog
///
/// A bundle publishes one prototype per cluster, provider and service kind;
/// live entities are always created from a prototype id.
pub struct PrototypeCatalog<'a, T> {
    api: &'a AdcmApi<T>,
}

impl<'a, T: AdcmTransport> PrototypeCatalog<'a, T> {
    pub fn new(api: &'a AdcmApi<T>) -> Self {
        Self { api }
    }

    /// # Errors
    /// `NoPrototype` when the bundle defines no cluster
    pub fn cluster_prototype(&self, bundle_id: EntityId) -> Result<EntityId> {
        self.first_prototype(&endpoints::cluster_prototypes(bundle_id), "cluster", bundle_id)
    }

    /// # Errors
    /// `NoPrototype` when the bundle defines no provider
    pub fn provider_prototype(&self, bundle_id: EntityId) -> Result<EntityId> {
        self.first_prototype(
            &endpoints::provider_prototypes(bundle_id),
            "provider",
            bundle_id,
        )
    }

    /// # Errors
    /// `NoPrototype` when the bundle defines no service called `name`
    pub fn service_prototype(&self, bundle_id: EntityId, name: &str) -> Result<EntityId> {
        self.first_prototype(
            &endpoints::service_prototypes(bundle_id, name),
            &format!("service '{}'", name),
            bundle_id,
        )
    }

    /// Accepts the prototype's license; repeating the call is harmless
    pub fn accept_license(&self, prototype_id: EntityId) -> Result<()> {
        self.api.put_unit(&endpoints::accept_license(prototype_id))
    }

    /// Resolves a component of an added service by exact name
    ///
    /// # Errors
    /// `NotFound` when the service has no component called `name`
    pub fn component(
        &self,
        cluster_id: EntityId,
        service_id: EntityId,
        name: &str,
    ) -> Result<Component> {
        let components: Vec<Component> = self.api.get_collection(
            &endpoints::service_components(cluster_id, service_id),
            "listing service components",
        )?;

        components
            .into_iter()
            .find(|component| component.name == name)
            .ok_or_else(|| AdcmError::NotFound {
                entity: "component".to_string(),
                criteria: format!(
                    "name={} in cluster {} service {}",
                    name, cluster_id, service_id
                ),
            })
    }

    fn first_prototype(&self, path: &str, kind: &str, bundle_id: EntityId) -> Result<EntityId> {
        let prototypes: Vec<Prototype> = self.api.get_results(path, "listing prototypes")?;
        prototypes
            .first()
            .map(|prototype| prototype.id)
            .ok_or_else(|| AdcmError::NoPrototype {
                kind: kind.to_string(),
                bundle_id: bundle_id.get(),
            })
    }
}
