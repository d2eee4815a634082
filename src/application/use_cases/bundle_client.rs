use crate::application::api::AdcmApi;
use crate::application::endpoints;
use crate::ports::inbound::ResourceLifecycle;
use crate::ports::outbound::{AdcmTransport, BundleSource};
use crate::provisioning::domain::{Bundle, BundleSearch, BundleSpec, Created};
use crate::provisioning::services::EntityResolver;
use crate::shared::security::validate_bundle_file_name;
use crate::shared::Result;
use serde_json::json;

/// BundleClient - Upload, lookup and removal of bundles
///
/// Creating a bundle is a two step exchange: the archive is uploaded to the
/// stack, then loaded by file name, which returns the new bundle id.
pub struct BundleClient<'a, T, S> {
    api: &'a AdcmApi<T>,
    source: S,
}

impl<'a, T: AdcmTransport, S: BundleSource> BundleClient<'a, T, S> {
    pub fn new(api: &'a AdcmApi<T>, source: S) -> Self {
        Self { api, source }
    }

    /// Every bundle loaded into ADCM (first listing page)
    pub fn list(&self) -> Result<Vec<Bundle>> {
        self.api.get_results(endpoints::BUNDLES, "listing bundles")
    }
}

impl<T: AdcmTransport, S: BundleSource> ResourceLifecycle for BundleClient<'_, T, S> {
    type Spec = BundleSpec;
    type Search = BundleSearch;
    type Entity = Bundle;

    const ENTITY: &'static str = "bundle";

    fn create(&self, spec: BundleSpec) -> Result<Bundle> {
        let archive = self.source.fetch(&spec.url)?;
        validate_bundle_file_name(&archive.file_name)?;
        tracing::info!(file = %archive.file_name, size = archive.bytes.len(), "Uploading bundle");

        self.api
            .upload(endpoints::STACK_UPLOAD, &archive.file_name, archive.bytes)?;
        let loaded: Created = self.api.post(
            endpoints::STACK_LOAD,
            json!({ "bundle_file": archive.file_name }),
            "loading bundle",
        )?;

        self.read(&BundleSearch::by_id(loaded.id))
    }

    fn read(&self, search: &BundleSearch) -> Result<Bundle> {
        EntityResolver::resolve_one(Self::ENTITY, self.list()?, search)
    }

    fn delete(&self, search: &BundleSearch) -> Result<()> {
        let bundle = self.read(search)?;
        self.api.delete(&endpoints::bundle(bundle.id))
    }
}
