//! ADCM REST API paths, relative to the server base URL.

use crate::provisioning::domain::EntityId;

pub const TOKEN: &str = "/api/v1/token/";

pub const BUNDLES: &str = "/api/v1/stack/bundle/";
pub const STACK_UPLOAD: &str = "/api/v1/stack/upload/";
pub const STACK_LOAD: &str = "/api/v1/stack/load/";

pub const CLUSTERS: &str = "/api/v1/cluster/";
pub const PROVIDERS: &str = "/api/v1/provider/";
pub const HOSTS: &str = "/api/v1/host/";

pub fn bundle(id: EntityId) -> String {
    format!("{}{}/", BUNDLES, id)
}

pub fn cluster_prototypes(bundle_id: EntityId) -> String {
    format!("/api/v1/stack/cluster/?bundle_id={}", bundle_id)
}

pub fn provider_prototypes(bundle_id: EntityId) -> String {
    format!("/api/v1/stack/provider/?bundle_id={}", bundle_id)
}

pub fn service_prototypes(bundle_id: EntityId, service_name: &str) -> String {
    format!(
        "/api/v1/stack/service/?bundle_id={}&name={}",
        bundle_id,
        urlencoding::encode(service_name)
    )
}

pub fn accept_license(prototype_id: EntityId) -> String {
    format!("/api/v1/stack/prototype/{}/accept_license/", prototype_id)
}

pub fn cluster(id: EntityId) -> String {
    format!("{}{}/", CLUSTERS, id)
}

pub fn cluster_hosts(cluster_id: EntityId) -> String {
    format!("{}host/", cluster(cluster_id))
}

pub fn cluster_services(cluster_id: EntityId) -> String {
    format!("{}service/", cluster(cluster_id))
}

pub fn cluster_service(cluster_id: EntityId, service_id: EntityId) -> String {
    format!("{}{}/", cluster_services(cluster_id), service_id)
}

pub fn service_components(cluster_id: EntityId, service_id: EntityId) -> String {
    format!("{}component/", cluster_service(cluster_id, service_id))
}

pub fn host_components(cluster_id: EntityId) -> String {
    format!("{}hostcomponent/", cluster(cluster_id))
}

pub fn provider(id: EntityId) -> String {
    format!("{}{}/", PROVIDERS, id)
}

pub fn provider_hosts(provider_id: EntityId) -> String {
    format!("{}host/", provider(provider_id))
}

pub fn host(id: EntityId) -> String {
    format!("{}{}/", HOSTS, id)
}

/// `config/current/` under an object path ending in `/`
pub fn config_current(object_path: &str) -> String {
    format!("{}config/current/", object_path)
}

/// `config/history/` under an object path ending in `/`
pub fn config_history(object_path: &str) -> String {
    format!("{}config/history/", object_path)
}
