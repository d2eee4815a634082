use crate::application::endpoints;
use crate::ports::outbound::{AdcmTransport, ApiRequest};
use crate::provisioning::domain::{ConfigMap, EntityId};
use crate::provisioning::services::merged;
use crate::shared::json::{decode, decode_collection, unwrap_results};
use crate::shared::{CancelSignal, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

/// Identifier-only item of a collection listing
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdOnly {
    pub id: EntityId,
}

/// Body of a `config/current/` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigState {
    #[serde(default)]
    pub config: Option<ConfigMap>,
    #[serde(default)]
    pub attr: Option<Value>,
}

impl ConfigState {
    pub fn into_config(self) -> ConfigMap {
        self.config.unwrap_or_default()
    }
}

/// Whether a configuration write resubmits the `attr` block read from ADCM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrHandling {
    Drop,
    Keep,
}

/// AdcmApi - Typed access to the ADCM REST API
///
/// Wraps an [`AdcmTransport`] with JSON decoding and the cancellation check
/// performed before every request. All entity clients share one instance.
pub struct AdcmApi<T> {
    transport: T,
    cancel: CancelSignal,
}

impl<T: AdcmTransport> AdcmApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cancel: CancelSignal::default(),
        }
    }

    /// Replaces the cancellation signal observed before each request
    pub fn with_cancel_signal(mut self, cancel: CancelSignal) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_signal(&self) -> &CancelSignal {
        &self.cancel
    }

    /// Sends one request unless the operation was cancelled
    pub fn send(&self, request: ApiRequest) -> Result<Value> {
        self.cancel.check()?;
        tracing::debug!(method = %request.method, path = %request.path, "ADCM request");
        self.transport.send(request)
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str, context: &str) -> Result<R> {
        let body = self.send(ApiRequest::get(path))?;
        decode(body, context)
    }

    /// GET of a listing returned either bare or in the results envelope
    pub fn get_collection<R: DeserializeOwned>(&self, path: &str, context: &str) -> Result<Vec<R>> {
        let body = self.send(ApiRequest::get(path))?;
        decode_collection(body, context)
    }

    /// GET of a listing that ADCM always wraps in the results envelope
    pub fn get_results<R: DeserializeOwned>(&self, path: &str, context: &str) -> Result<Vec<R>> {
        let body = self.send(ApiRequest::get(path))?;
        unwrap_results(body, context)
    }

    pub fn post<R: DeserializeOwned>(&self, path: &str, body: Value, context: &str) -> Result<R> {
        let response = self.send(ApiRequest::post(path, body))?;
        decode(response, context)
    }

    /// POST whose response body is not needed
    pub fn post_unit(&self, path: &str, body: Value) -> Result<()> {
        self.send(ApiRequest::post(path, body)).map(|_| ())
    }

    pub fn put_unit(&self, path: &str) -> Result<()> {
        self.send(ApiRequest::put(path)).map(|_| ())
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        self.send(ApiRequest::delete(path)).map(|_| ())
    }

    pub fn upload(&self, path: &str, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        self.send(ApiRequest::upload(path, file_name, bytes))
            .map(|_| ())
    }

    /// Current configuration of the object at `object_path`
    pub fn current_config(&self, object_path: &str) -> Result<ConfigState> {
        self.get(
            &endpoints::config_current(object_path),
            "reading current configuration",
        )
    }

    /// Deep-merges `overrides` over the current configuration and stores the
    /// result as a new configuration version
    ///
    /// # Returns
    /// The configuration that was written
    pub fn apply_config_overrides(
        &self,
        object_path: &str,
        overrides: &ConfigMap,
        attr: AttrHandling,
    ) -> Result<ConfigMap> {
        let current = self.current_config(object_path)?;
        let config = merged(current.config.as_ref().unwrap_or(&ConfigMap::new()), overrides);

        let mut body = json!({ "config": config });
        if attr == AttrHandling::Keep {
            if let Some(attr) = current.attr.filter(|a| !a.is_null()) {
                body["attr"] = attr;
            }
        }

        self.post_unit(&endpoints::config_history(object_path), body)?;
        Ok(config)
    }

    /// Lists ids at `listing_path`, then reads each object and its current
    /// configuration
    ///
    /// `detail_path` maps an id to the object's path.
    pub fn read_all_with_config<E, F>(
        &self,
        listing_path: &str,
        detail_path: F,
        context: &str,
        mut attach_config: impl FnMut(&mut E, ConfigMap),
    ) -> Result<Vec<E>>
    where
        E: DeserializeOwned,
        F: Fn(EntityId) -> String,
    {
        let ids: Vec<IdOnly> = self.get_collection(listing_path, context)?;
        let mut entities = Vec::with_capacity(ids.len());
        for IdOnly { id } in ids {
            let path = detail_path(id);
            let mut entity: E = self.get(&path, context)?;
            let config = self.current_config(&path)?.into_config();
            attach_config(&mut entity, config);
            entities.push(entity);
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ApiMethod;
    use crate::shared::AdcmError;
    use crate::testing::ScriptedTransport;

    #[test]
    fn test_cancelled_api_sends_nothing() {
        let transport = ScriptedTransport::new();
        let cancel = CancelSignal::new();
        cancel.cancel();
        let api = AdcmApi::new(&transport).with_cancel_signal(cancel);

        let result: Result<Value> = api.get("/api/v1/cluster/", "listing clusters");
        assert!(matches!(result, Err(AdcmError::Cancelled)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_apply_config_overrides_merges_over_current() {
        let transport = ScriptedTransport::new()
            .on(
                ApiMethod::Get,
                "/api/v1/cluster/4/config/current/",
                json!({"config": {"a": {"x": 1, "y": 2}}, "attr": {"grp": {"active": true}}}),
            )
            .on(ApiMethod::Post, "/api/v1/cluster/4/config/history/", json!({"id": 10}));
        let api = AdcmApi::new(&transport);

        let overrides = json!({"a": {"y": 9, "z": 3}});
        let written = api
            .apply_config_overrides(
                "/api/v1/cluster/4/",
                overrides.as_object().unwrap(),
                AttrHandling::Drop,
            )
            .unwrap();

        assert_eq!(Value::Object(written), json!({"a": {"x": 1, "y": 9, "z": 3}}));
        let history = transport.requests_to(ApiMethod::Post, "/api/v1/cluster/4/config/history/");
        assert_eq!(history.len(), 1);
        assert_eq!(
            history[0].json().unwrap(),
            &json!({"config": {"a": {"x": 1, "y": 9, "z": 3}}})
        );
    }

    #[test]
    fn test_apply_config_overrides_keeps_attr_when_asked() {
        let transport = ScriptedTransport::new()
            .on(
                ApiMethod::Get,
                "/api/v1/cluster/4/service/9/config/current/",
                json!({"config": {"port": 80}, "attr": {"ssl": {"active": false}}}),
            )
            .on(
                ApiMethod::Post,
                "/api/v1/cluster/4/service/9/config/history/",
                json!({}),
            );
        let api = AdcmApi::new(&transport);

        let overrides = json!({"port": 8080});
        api.apply_config_overrides(
            "/api/v1/cluster/4/service/9/",
            overrides.as_object().unwrap(),
            AttrHandling::Keep,
        )
        .unwrap();

        let history = transport.requests_to(
            ApiMethod::Post,
            "/api/v1/cluster/4/service/9/config/history/",
        );
        assert_eq!(
            history[0].json().unwrap(),
            &json!({"config": {"port": 8080}, "attr": {"ssl": {"active": false}}})
        );
    }

    #[test]
    fn test_null_current_config_is_treated_as_empty() {
        let transport = ScriptedTransport::new()
            .on(ApiMethod::Get, "/api/v1/host/2/config/current/", json!({"config": null}))
            .on(ApiMethod::Post, "/api/v1/host/2/config/history/", json!({}));
        let api = AdcmApi::new(&transport);

        let overrides = json!({"ansible_user": "root"});
        let written = api
            .apply_config_overrides("/api/v1/host/2/", overrides.as_object().unwrap(), AttrHandling::Drop)
            .unwrap();
        assert_eq!(Value::Object(written), json!({"ansible_user": "root"}));
    }
}
