use crate::application::api::AdcmApi;
use crate::application::dto::{BundleModel, ClusterModel, HostModel, ProviderModel, ResourceManifest};
use crate::application::use_cases::{BundleClient, ClusterClient, HostClient, ProviderClient};
use crate::ports::inbound::ResourceLifecycle;
use crate::ports::outbound::{AdcmTransport, BundleSource, ProgressReporter};
use crate::provisioning::policies::ReadinessPolicy;
use crate::shared::error::AdcmError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::Value;

fn to_value<M: Serialize>(model: &M) -> Result<Value> {
    serde_json::to_value(model).map_err(|e| AdcmError::malformed("rendering resource", e))
}

/// Error returned for any update request, whatever the manifest holds
///
/// Only the manifest's kind is consulted, so incomplete definitions are
/// rejected the same way as valid ones.
pub fn reject_update(manifest: &ResourceManifest) -> AdcmError {
    AdcmError::unsupported(&manifest.kind().to_string(), "update")
}

/// ManageResourcesUseCase - Dispatches resource definitions to entity clients
///
/// Each operation maps a manifest onto the matching client's lifecycle call
/// and renders the resulting entity back into its resource model.
///
/// # Type Parameters
/// * `T` - AdcmTransport implementation
/// * `S` - BundleSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ManageResourcesUseCase<'a, T, S, PR> {
    api: &'a AdcmApi<T>,
    bundles: BundleClient<'a, T, S>,
    clusters: ClusterClient<'a, T, PR>,
}

impl<'a, T, S, PR> ManageResourcesUseCase<'a, T, S, PR>
where
    T: AdcmTransport,
    S: BundleSource,
    PR: ProgressReporter,
{
    pub fn new(
        api: &'a AdcmApi<T>,
        bundle_source: S,
        progress_reporter: PR,
        readiness: ReadinessPolicy,
    ) -> Self {
        Self {
            api,
            bundles: BundleClient::new(api, bundle_source),
            clusters: ClusterClient::new(api, progress_reporter, readiness),
        }
    }

    pub fn create(&self, manifest: &ResourceManifest) -> Result<Value> {
        match manifest {
            ResourceManifest::Bundle(model) => {
                let bundle = self.bundles.create(model.to_spec()?)?;
                to_value(&BundleModel::from_entity(&bundle, &model.url))
            }
            ResourceManifest::Provider(model) => {
                let provider = ProviderClient::new(self.api).create(model.to_spec()?)?;
                to_value(&ProviderModel::from_entity(&provider))
            }
            ResourceManifest::Host(model) => {
                let host = HostClient::new(self.api).create(model.to_spec()?)?;
                to_value(&HostModel::from_entity(&host))
            }
            ResourceManifest::Cluster(model) => {
                let cluster = self.clusters.create(model.to_spec()?)?;
                to_value(&ClusterModel::from_entity(&cluster, model))
            }
        }
    }

    /// Resolves the single entity selected by the manifest's populated fields
    pub fn read(&self, manifest: &ResourceManifest) -> Result<Value> {
        match manifest {
            ResourceManifest::Bundle(model) => {
                let bundle = self.bundles.read(&model.to_search()?)?;
                to_value(&BundleModel::from_entity(&bundle, &model.url))
            }
            ResourceManifest::Provider(model) => {
                let provider = ProviderClient::new(self.api).read(&model.to_search()?)?;
                to_value(&ProviderModel::from_entity(&provider))
            }
            ResourceManifest::Host(model) => {
                let host = HostClient::new(self.api).read(&model.to_search()?)?;
                to_value(&HostModel::from_entity(&host))
            }
            ResourceManifest::Cluster(model) => {
                let cluster = self.clusters.read(&model.to_search()?)?;
                to_value(&ClusterModel::from_entity(&cluster, model))
            }
        }
    }

    /// Always fails without contacting ADCM
    pub fn update(&self, manifest: &ResourceManifest) -> Result<Value> {
        Err(reject_update(manifest))
    }

    pub fn delete(&self, manifest: &ResourceManifest) -> Result<()> {
        match manifest {
            ResourceManifest::Bundle(model) => self.bundles.delete(&model.to_search()?),
            ResourceManifest::Provider(model) => {
                ProviderClient::new(self.api).delete(&model.to_search()?)
            }
            ResourceManifest::Host(model) => HostClient::new(self.api).delete(&model.to_search()?),
            ResourceManifest::Cluster(model) => self.clusters.delete(&model.to_search()?),
        }
    }

    /// Every loaded bundle as resource models
    pub fn list_bundles(&self) -> Result<Value> {
        let models: Vec<BundleModel> = self
            .bundles
            .list()?
            .iter()
            .map(|bundle| BundleModel::from_entity(bundle, ""))
            .collect();
        to_value(&models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiMethod, BundleArchive};
    use crate::testing::ScriptedTransport;
    use serde_json::json;

    struct NoDownloads;

    impl BundleSource for NoDownloads {
        fn fetch(&self, url: &str) -> Result<BundleArchive> {
            Err(AdcmError::transport(None, format!("unexpected download of {}", url)))
        }
    }

    struct Silent;

    impl ProgressReporter for Silent {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn manifest(value: Value) -> ResourceManifest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_update_touches_nothing() {
        let transport = ScriptedTransport::new();
        let api = AdcmApi::new(&transport);
        let use_case =
            ManageResourcesUseCase::new(&api, NoDownloads, Silent, ReadinessPolicy::default());

        let err = use_case
            .update(&manifest(json!({"kind": "cluster", "name": "analytics", "bundle_id": 5})))
            .unwrap_err();

        assert!(matches!(err, AdcmError::UnsupportedOperation { .. }));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_update_of_incomplete_manifest_is_still_unsupported() {
        let transport = ScriptedTransport::new();
        let api = AdcmApi::new(&transport);
        let use_case =
            ManageResourcesUseCase::new(&api, NoDownloads, Silent, ReadinessPolicy::default());

        // No bundle_id: building a spec would fail validation first
        let err = use_case
            .update(&manifest(json!({"kind": "cluster", "name": "analytics"})))
            .unwrap_err();

        match err {
            AdcmError::UnsupportedOperation { entity, operation } => {
                assert_eq!(entity, "cluster");
                assert_eq!(operation, "update");
            }
            other => panic!("expected UnsupportedOperation, got {:?}", other),
        }
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_read_provider_renders_model() {
        let transport = ScriptedTransport::new()
            .on(ApiMethod::Get, "/api/v1/provider/", json!([{"id": 7}]))
            .on(
                ApiMethod::Get,
                "/api/v1/provider/7/",
                json!({"id": 7, "name": "ssh", "bundle_id": 4, "state": "created"}),
            )
            .on(
                ApiMethod::Get,
                "/api/v1/provider/7/config/current/",
                json!({"config": {"ansible_user": "adcm"}}),
            );
        let api = AdcmApi::new(&transport);
        let use_case =
            ManageResourcesUseCase::new(&api, NoDownloads, Silent, ReadinessPolicy::default());

        let rendered = use_case
            .read(&manifest(json!({"kind": "provider", "name": "ssh"})))
            .unwrap();

        assert_eq!(rendered["id"], json!(7));
        assert_eq!(rendered["bundle_id"], json!(4));
        assert_eq!(rendered["config"], json!(r#"{"ansible_user":"adcm"}"#));
    }

    #[test]
    fn test_delete_missing_host_issues_no_delete() {
        let transport = ScriptedTransport::new().on(ApiMethod::Get, "/api/v1/host/", json!([]));
        let api = AdcmApi::new(&transport);
        let use_case =
            ManageResourcesUseCase::new(&api, NoDownloads, Silent, ReadinessPolicy::default());

        let err = use_case
            .delete(&manifest(json!({"kind": "host", "fqdn": "host9.local"})))
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(transport.calls(), vec![(ApiMethod::Get, "/api/v1/host/".to_string())]);
    }

    #[test]
    fn test_invalid_model_fails_before_any_request() {
        let transport = ScriptedTransport::new();
        let api = AdcmApi::new(&transport);
        let use_case =
            ManageResourcesUseCase::new(&api, NoDownloads, Silent, ReadinessPolicy::default());

        let err = use_case
            .create(&manifest(json!({
                "kind": "cluster",
                "name": "analytics",
                "bundle_id": 5,
                "hc_map": "{"
            })))
            .unwrap_err();

        assert!(matches!(err, AdcmError::Validation { .. }));
        assert!(transport.requests().is_empty());
    }
}
