use crate::application::api::AdcmApi;
use crate::application::endpoints;
use crate::application::use_cases::ProvisionClusterUseCase;
use crate::ports::inbound::ResourceLifecycle;
use crate::ports::outbound::{AdcmTransport, ProgressReporter};
use crate::provisioning::domain::{Cluster, ClusterSearch, ClusterSpec};
use crate::provisioning::policies::ReadinessPolicy;
use crate::provisioning::services::EntityResolver;
use crate::shared::Result;

/// Every cluster with its current configuration
pub(crate) fn list_clusters<T: AdcmTransport>(api: &AdcmApi<T>) -> Result<Vec<Cluster>> {
    api.read_all_with_config(
        endpoints::CLUSTERS,
        endpoints::cluster,
        "reading clusters",
        |cluster: &mut Cluster, config| cluster.config = config,
    )
}

/// ClusterClient - Cluster lifecycle; creation runs the full provisioning
pub struct ClusterClient<'a, T, PR> {
    api: &'a AdcmApi<T>,
    provisioning: ProvisionClusterUseCase<'a, T, PR>,
}

impl<'a, T: AdcmTransport, PR: ProgressReporter> ClusterClient<'a, T, PR> {
    pub fn new(api: &'a AdcmApi<T>, progress_reporter: PR, readiness: ReadinessPolicy) -> Self {
        Self {
            api,
            provisioning: ProvisionClusterUseCase::new(api, progress_reporter, readiness),
        }
    }

    pub fn list(&self) -> Result<Vec<Cluster>> {
        list_clusters(self.api)
    }
}

impl<T: AdcmTransport, PR: ProgressReporter> ResourceLifecycle for ClusterClient<'_, T, PR> {
    type Spec = ClusterSpec;
    type Search = ClusterSearch;
    type Entity = Cluster;

    const ENTITY: &'static str = "cluster";

    fn create(&self, spec: ClusterSpec) -> Result<Cluster> {
        self.provisioning.execute(&spec)
    }

    fn read(&self, search: &ClusterSearch) -> Result<Cluster> {
        EntityResolver::resolve_one(Self::ENTITY, self.list()?, search)
    }

    fn delete(&self, search: &ClusterSearch) -> Result<()> {
        let cluster = self.read(search)?;
        tracing::info!(cluster_id = %cluster.id, name = %cluster.name, "Deleting cluster");
        self.api.delete(&endpoints::cluster(cluster.id))
    }
}
