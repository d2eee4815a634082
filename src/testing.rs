//! Testing utilities for code built on [`AdcmTransport`].
//!
//! [`ScriptedTransport`] answers requests from a route table instead of a
//! live ADCM server and records every request it receives, so tests can
//! assert on the exact call sequence.
//!
//! # Example
//!
//! ```
//! use adcm_provider::application::AdcmApi;
//! use adcm_provider::ports::outbound::ApiMethod;
//! use adcm_provider::testing::ScriptedTransport;
//! use serde_json::json;
//!
//! let transport = ScriptedTransport::new()
//!     .on(ApiMethod::Get, "/api/v1/cluster/", json!([]));
//! let api = AdcmApi::new(&transport);
//!
//! let ids: Vec<serde_json::Value> = api.get_collection("/api/v1/cluster/", "listing").unwrap();
//! assert!(ids.is_empty());
//! assert_eq!(transport.count(ApiMethod::Get, "/api/v1/cluster/"), 1);
//! ```

use crate::ports::outbound::{AdcmTransport, ApiMethod, ApiRequest};
use crate::shared::{AdcmError, CancelSignal, Result};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(u16, String),
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<(ApiMethod, String), VecDeque<Reply>>,
    log: Vec<ApiRequest>,
    cancel_after: Option<(usize, CancelSignal)>,
}

/// An in-memory ADCM server stand-in.
///
/// Each `(method, path)` route holds a queue of replies. Replies are consumed
/// in order and the last one repeats, which makes it easy to script polling:
/// queue a few "not found" statuses followed by the eventual success.
/// Requests without a route fail with a status-less transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<Script>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply for `method path`.
    pub fn on(self, method: ApiMethod, path: &str, body: Value) -> Self {
        self.push(method, path, Reply::Json(body));
        self
    }

    /// Queue an HTTP error reply for `method path`.
    pub fn on_status(self, method: ApiMethod, path: &str, status: u16) -> Self {
        self.push(
            method,
            path,
            Reply::Status(status, format!("HTTP {} for {} {}", status, method, path)),
        );
        self
    }

    /// Trip `cancel` once `requests` requests have been answered.
    pub fn cancel_after(self, requests: usize, cancel: CancelSignal) -> Self {
        self.lock().cancel_after = Some((requests, cancel));
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().log.clone()
    }

    /// Requests received for one route, in order.
    pub fn requests_to(&self, method: ApiMethod, path: &str) -> Vec<ApiRequest> {
        self.lock()
            .log
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn count(&self, method: ApiMethod, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    /// `(method, path)` pairs in the order they were requested.
    pub fn calls(&self) -> Vec<(ApiMethod, String)> {
        self.lock()
            .log
            .iter()
            .map(|r| (r.method, r.path.clone()))
            .collect()
    }

    fn push(&self, method: ApiMethod, path: &str, reply: Reply) {
        self.lock()
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AdcmTransport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> Result<Value> {
        let mut script = self.lock();
        let key = (request.method, request.path.clone());
        script.log.push(request);

        if let Some((after, cancel)) = &script.cancel_after {
            if script.log.len() >= *after {
                cancel.cancel();
            }
        }

        let reply = match script.routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match reply {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Status(status, message)) => Err(AdcmError::transport(Some(status), message)),
            None => Err(AdcmError::transport(
                None,
                format!("no scripted response for {} {}", key.0, key.1),
            )),
        }
    }
}
