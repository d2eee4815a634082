use crate::application::api::{AdcmApi, AttrHandling};
use crate::application::endpoints;
use crate::application::use_cases::PrototypeCatalog;
use crate::ports::inbound::ResourceLifecycle;
use crate::ports::outbound::AdcmTransport;
use crate::provisioning::domain::{Created, Provider, ProviderSearch, ProviderSpec};
use crate::provisioning::services::EntityResolver;
use crate::shared::Result;
use serde_json::json;

/// ProviderClient - Host providers created from a bundle's provider prototype
pub struct ProviderClient<'a, T> {
    api: &'a AdcmApi<T>,
}

impl<'a, T: AdcmTransport> ProviderClient<'a, T> {
    pub fn new(api: &'a AdcmApi<T>) -> Self {
        Self { api }
    }

    /// Every provider with its current configuration
    pub fn list(&self) -> Result<Vec<Provider>> {
        self.api.read_all_with_config(
            endpoints::PROVIDERS,
            endpoints::provider,
            "reading providers",
            |provider: &mut Provider, config| provider.config = config,
        )
    }
}

impl<T: AdcmTransport> ResourceLifecycle for ProviderClient<'_, T> {
    type Spec = ProviderSpec;
    type Search = ProviderSearch;
    type Entity = Provider;

    const ENTITY: &'static str = "provider";

    fn create(&self, spec: ProviderSpec) -> Result<Provider> {
        let catalog = PrototypeCatalog::new(self.api);
        let prototype_id = catalog.provider_prototype(spec.bundle_id)?;

        let created: Created = self.api.post(
            endpoints::PROVIDERS,
            json!({
                "name": spec.name,
                "description": spec.description,
                "prototype_id": prototype_id,
            }),
            "creating provider",
        )?;
        tracing::info!(provider_id = %created.id, name = %spec.name, "Created provider");

        if let Some(overrides) = spec.config.as_ref().filter(|c| !c.is_empty()) {
            self.api.apply_config_overrides(
                &endpoints::provider(created.id),
                overrides,
                AttrHandling::Drop,
            )?;
        }

        self.read(&ProviderSearch::by_id(created.id))
    }

    fn read(&self, search: &ProviderSearch) -> Result<Provider> {
        EntityResolver::resolve_one(Self::ENTITY, self.list()?, search)
    }

    fn delete(&self, search: &ProviderSearch) -> Result<()> {
        let provider = self.read(search)?;
        self.api.delete(&endpoints::provider(provider.id))
    }
}
