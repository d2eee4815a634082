use crate::application::api::{AdcmApi, AttrHandling};
use crate::application::dto::ProvisioningLog;
use crate::application::endpoints;
use crate::application::use_cases::cluster_client::list_clusters;
use crate::application::use_cases::{HostClient, PrototypeCatalog};
use crate::ports::inbound::ResourceLifecycle;
use crate::ports::outbound::{AdcmTransport, ApiRequest, ProgressReporter};
use crate::provisioning::domain::{
    Cluster, ClusterSearch, ClusterSpec, Created, EntityId, HostComponentEntry, HostSearch,
    ServiceAssignment,
};
use crate::provisioning::policies::ReadinessPolicy;
use crate::provisioning::services::EntityResolver;
use crate::shared::error::AdcmError;
use crate::shared::Result;
use serde_json::json;
use std::thread;
use std::time::Instant;


/// HTTP status ADCM answers with while a new service is not yet visible
const NOT_READY_STATUS: u16 = 404;

/// ProvisionClusterUseCase - Creates a cluster and wires its topology
///
/// Every step depends on ids produced by the previous ones, so the run is
/// strictly sequential:
///
/// 1. resolve the bundle's cluster prototype and accept its license
/// 2. create the cluster and merge the cluster configuration
/// 3. for each host (sorted by FQDN): attach it, add each referenced service
///    once, wait until the service is ready, merge its configuration and
///    resolve the requested components
/// 4. submit the whole host-component mapping in one call
///
/// The first failure aborts the run. Nothing is rolled back; what was
/// created so far is reported from the [`ProvisioningLog`].
///
/// # Type Parameters
/// * `T` - AdcmTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct ProvisionClusterUseCase<'a, T, PR> {
    api: &'a AdcmApi<T>,
    progress_reporter: PR,
    readiness: ReadinessPolicy,
}

impl<'a, T, PR> ProvisionClusterUseCase<'a, T, PR>
where
    T: AdcmTransport,
    PR: ProgressReporter,
{
    pub fn new(api: &'a AdcmApi<T>, progress_reporter: PR, readiness: ReadinessPolicy) -> Self {
        Self {
            api,
            progress_reporter,
            readiness,
        }
    }

    /// Provisions the cluster described by `spec`
    ///
    /// On failure the partial-creation journal is logged and reported, and
    /// the original error is returned unchanged.
    pub fn execute(&self, spec: &ClusterSpec) -> Result<Cluster> {
        let mut log = ProvisioningLog::new();
        match self.provision(spec, &mut log) {
            Ok(cluster) => {
                self.progress_reporter.report_completion(&format!(
                    "Cluster '{}' provisioned (id {})",
                    cluster.name, cluster.id
                ));
                Ok(cluster)
            }
            Err(error) => {
                if !log.is_empty() {
                    tracing::warn!(created = %log, "Cluster provisioning failed part way");
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Provisioning stopped; already created: {}",
                        log
                    ));
                }
                Err(error)
            }
        }
    }

    /// Runs the provisioning steps, recording created resources in `log`
    pub fn provision(&self, spec: &ClusterSpec, log: &mut ProvisioningLog) -> Result<Cluster> {
        let total_steps = spec.hc_map.len() + 3;
        let catalog = PrototypeCatalog::new(self.api);

        // Step 1: Prototype and license
        self.progress_reporter
            .report_progress(0, total_steps, Some("Resolving cluster prototype"));
        let prototype_id = catalog.cluster_prototype(spec.bundle_id)?;
        catalog.accept_license(prototype_id)?;
        tracing::info!(
            bundle_id = %spec.bundle_id,
            prototype_id = %prototype_id,
            "Accepted cluster license"
        );

        // Step 2: Cluster and cluster configuration
        let cluster_id = self.create_cluster(spec, prototype_id)?;
        log.record_cluster(cluster_id);
        self.progress_reporter
            .report_progress(1, total_steps, Some("Cluster created"));

        if let Some(overrides) = spec.cluster_config.as_ref().filter(|c| !c.is_empty()) {
            self.api.apply_config_overrides(
                &endpoints::cluster(cluster_id),
                overrides,
                AttrHandling::Drop,
            )?;
            tracing::info!(cluster_id = %cluster_id, "Applied cluster configuration");
        }
        self.progress_reporter
            .report_progress(2, total_steps, Some("Cluster configured"));

        // Step 3: Hosts, services and components
        let mut entries: Vec<HostComponentEntry> = Vec::new();
        for (index, (fqdn, assignments)) in spec.hc_map.iter().enumerate() {
            let host_id = self.attach_host(cluster_id, fqdn, log)?;
            for assignment in assignments {
                self.place_components(
                    spec,
                    cluster_id,
                    host_id,
                    assignment,
                    &catalog,
                    log,
                    &mut entries,
                )?;
            }
            self.progress_reporter
                .report_progress(3 + index, total_steps, Some(fqdn.as_str()));
        }

        // Step 4: One bulk host-component mapping
        if !spec.hc_map.is_empty() {
            self.api.post_unit(
                &endpoints::host_components(cluster_id),
                json!({ "hc": entries }),
            )?;
            log.host_components_mapped = true;
            tracing::info!(
                cluster_id = %cluster_id,
                placements = entries.len(),
                "Mapped host components"
            );
        }
        self.progress_reporter
            .report_progress(total_steps, total_steps, Some("Topology applied"));

        EntityResolver::resolve_one(
            "cluster",
            list_clusters(self.api)?,
            &ClusterSearch::by_id(cluster_id),
        )
    }

    fn create_cluster(&self, spec: &ClusterSpec, prototype_id: EntityId) -> Result<EntityId> {
        let created: Created = self.api.post(
            endpoints::CLUSTERS,
            json!({
                "name": spec.name,
                "description": spec.description,
                "prototype_id": prototype_id,
            }),
            "creating cluster",
        )?;
        tracing::info!(cluster_id = %created.id, name = %spec.name, "Created cluster");
        Ok(created.id)
    }

    fn attach_host(
        &self,
        cluster_id: EntityId,
        fqdn: &str,
        log: &mut ProvisioningLog,
    ) -> Result<EntityId> {
        let hosts = HostClient::new(self.api);
        let host = hosts.read(&HostSearch::by_fqdn(fqdn))?;
        hosts.attach_to_cluster(cluster_id, host.id)?;
        log.record_host(fqdn, host.id);
        tracing::info!(cluster_id = %cluster_id, host_id = %host.id, fqdn, "Attached host");
        Ok(host.id)
    }

    #[allow(clippy::too_many_arguments)]
    fn place_components(
        &self,
        spec: &ClusterSpec,
        cluster_id: EntityId,
        host_id: EntityId,
        assignment: &ServiceAssignment,
        catalog: &PrototypeCatalog<'_, T>,
        log: &mut ProvisioningLog,
        entries: &mut Vec<HostComponentEntry>,
    ) -> Result<()> {
        for (service_name, component_names) in assignment {
            let service_id = match log.service_id(service_name) {
                Some(service_id) => service_id,
                None => {
                    let service_id = self.add_service(spec, cluster_id, service_name, catalog)?;
                    log.record_service(service_name, service_id);
                    service_id
                }
            };

            for component_name in component_names {
                let component = catalog.component(cluster_id, service_id, component_name)?;
                entries.push(HostComponentEntry {
                    component_id: component.id,
                    host_id,
                    service_id,
                });
            }
        }
        Ok(())
    }

    /// Adds a service, waits for it and applies its configuration overrides
    fn add_service(
        &self,
        spec: &ClusterSpec,
        cluster_id: EntityId,
        service_name: &str,
        catalog: &PrototypeCatalog<'_, T>,
    ) -> Result<EntityId> {
        let prototype_id = catalog.service_prototype(spec.bundle_id, service_name)?;
        let created: Created = self.api.post(
            &endpoints::cluster_services(cluster_id),
            json!({ "cluster_id": cluster_id, "prototype_id": prototype_id }),
            "adding service",
        )?;
        tracing::info!(
            cluster_id = %cluster_id,
            service_id = %created.id,
            service = service_name,
            "Added service"
        );

        self.wait_until_ready(cluster_id, created.id, service_name)?;

        if let Some(overrides) = spec.services_config.get(service_name) {
            self.api.apply_config_overrides(
                &endpoints::cluster_service(cluster_id, created.id),
                overrides,
                AttrHandling::Keep,
            )?;
            tracing::info!(
                service_id = %created.id,
                service = service_name,
                "Applied service configuration"
            );
        }

        Ok(created.id)
    }

    /// Polls the service until ADCM reports it, within the readiness budget
    fn wait_until_ready(
        &self,
        cluster_id: EntityId,
        service_id: EntityId,
        service_name: &str,
    ) -> Result<()> {
        let path = endpoints::cluster_service(cluster_id, service_id);
        let started = Instant::now();

        loop {
            match self.api.send(ApiRequest::get(path.as_str())) {
                Ok(_) => return Ok(()),
                Err(error) if error.http_status() == Some(NOT_READY_STATUS) => {
                    tracing::debug!(service_id = %service_id, "Service not ready yet");
                }
                Err(error) => return Err(error),
            }

            match self.readiness.next_pause(started.elapsed()) {
                Some(pause) => thread::sleep(pause),
                None => {
                    return Err(AdcmError::Timeout {
                        what: format!("service '{}' to become ready", service_name),
                        waited: started.elapsed(),
                    })
                }
            }
        }
    }
}
