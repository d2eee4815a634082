use crate::provisioning::domain::EntityId;
use std::fmt;

/// ProvisioningLog - Journal of what a provisioning run created
///
/// Provisioning is not transactional. When a later step fails, the resources
/// recorded here stay behind in ADCM and have to be removed by hand (or by
/// deleting the cluster, which takes its services and attachments along).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningLog {
    pub cluster: Option<EntityId>,
    /// Host FQDN and id, in attachment order
    pub attached_hosts: Vec<(String, EntityId)>,
    /// Service name and id, in the order the services were added
    pub added_services: Vec<(String, EntityId)>,
    pub host_components_mapped: bool,
}

impl ProvisioningLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cluster(&mut self, cluster_id: EntityId) {
        self.cluster = Some(cluster_id);
    }

    pub fn record_host(&mut self, fqdn: &str, host_id: EntityId) {
        self.attached_hosts.push((fqdn.to_string(), host_id));
    }

    pub fn record_service(&mut self, name: &str, service_id: EntityId) {
        self.added_services.push((name.to_string(), service_id));
    }

    /// Id of a service added earlier in this run
    pub fn service_id(&self, name: &str) -> Option<EntityId> {
        self.added_services
            .iter()
            .find(|(added, _)| added == name)
            .map(|(_, id)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.cluster.is_none() && self.attached_hosts.is_empty() && self.added_services.is_empty()
    }
}

impl fmt::Display for ProvisioningLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cluster {
            Some(cluster_id) => write!(f, "cluster {}", cluster_id)?,
            None => return write!(f, "nothing created"),
        }

        if !self.attached_hosts.is_empty() {
            let hosts: Vec<String> = self
                .attached_hosts
                .iter()
                .map(|(fqdn, id)| format!("{} ({})", fqdn, id))
                .collect();
            write!(f, "; attached hosts: {}", hosts.join(", "))?;
        }

        if !self.added_services.is_empty() {
            let services: Vec<String> = self
                .added_services
                .iter()
                .map(|(name, id)| format!("{} ({})", name, id))
                .collect();
            write!(f, "; added services: {}", services.join(", "))?;
        }

        if self.host_components_mapped {
            write!(f, "; host components mapped")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: i64) -> EntityId {
        EntityId::new(value).unwrap()
    }

    #[test]
    fn test_empty_log() {
        let log = ProvisioningLog::new();
        assert!(log.is_empty());
        assert_eq!(log.to_string(), "nothing created");
    }

    #[test]
    fn test_partial_run_summary() {
        let mut log = ProvisioningLog::new();
        log.record_cluster(id(12));
        log.record_host("host1.local", id(1));
        log.record_service("svcA", id(30));

        assert_eq!(log.service_id("svcA"), Some(id(30)));
        assert_eq!(log.service_id("svcB"), None);
        assert_eq!(
            log.to_string(),
            "cluster 12; attached hosts: host1.local (1); added services: svcA (30)"
        );
    }
}
