use crate::application::api::{AdcmApi, AttrHandling};
use crate::application::endpoints;
use crate::ports::inbound::ResourceLifecycle;
use crate::ports::outbound::AdcmTransport;
use crate::provisioning::domain::{Created, EntityId, Host, HostSearch, HostSpec};
use crate::provisioning::services::EntityResolver;
use crate::shared::Result;
use serde_json::json;

/// HostClient - Hosts registered under a provider
///
/// Hosts are also attached to clusters by the provisioning use case, which
/// shares [`HostClient::attach_to_cluster`] and [`HostClient::list`].
pub struct HostClient<'a, T> {
    api: &'a AdcmApi<T>,
}

impl<'a, T: AdcmTransport> HostClient<'a, T> {
    pub fn new(api: &'a AdcmApi<T>) -> Self {
        Self { api }
    }

    /// Every host with its current configuration
    pub fn list(&self) -> Result<Vec<Host>> {
        self.api.read_all_with_config(
            endpoints::HOSTS,
            endpoints::host,
            "reading hosts",
            |host: &mut Host, config| host.config = config,
        )
    }

    pub fn attach_to_cluster(&self, cluster_id: EntityId, host_id: EntityId) -> Result<()> {
        self.api.post_unit(
            &endpoints::cluster_hosts(cluster_id),
            json!({ "host_id": host_id, "description": "" }),
        )
    }
}

impl<T: AdcmTransport> ResourceLifecycle for HostClient<'_, T> {
    type Spec = HostSpec;
    type Search = HostSearch;
    type Entity = Host;

    const ENTITY: &'static str = "host";

    fn create(&self, spec: HostSpec) -> Result<Host> {
        let created: Created = self.api.post(
            &endpoints::provider_hosts(spec.provider_id),
            json!({ "fqdn": spec.fqdn, "description": spec.description }),
            "creating host",
        )?;
        tracing::info!(host_id = %created.id, fqdn = %spec.fqdn, "Created host");

        if let Some(overrides) = spec.config.as_ref().filter(|c| !c.is_empty()) {
            self.api.apply_config_overrides(
                &endpoints::host(created.id),
                overrides,
                AttrHandling::Drop,
            )?;
        }

        if let Some(cluster_id) = spec.cluster_id {
            self.attach_to_cluster(cluster_id, created.id)?;
        }

        self.read(&HostSearch::by_id(created.id))
    }

    fn read(&self, search: &HostSearch) -> Result<Host> {
        EntityResolver::resolve_one(Self::ENTITY, self.list()?, search)
    }

    fn delete(&self, search: &HostSearch) -> Result<()> {
        let host = self.read(search)?;
        self.api.delete(&endpoints::host(host.id))
    }
}
