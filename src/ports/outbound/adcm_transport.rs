use crate::shared::Result;
use serde_json::Value;
use std::fmt;

/// HTTP verbs used against the ADCM API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
            ApiMethod::Put => "PUT",
            ApiMethod::Delete => "DELETE",
        };
        write!(f, "{}", verb)
    }
}

/// Body attached to an ADCM request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Sent as `application/json;charset=utf-8`
    Json(Value),
    /// Sent as `multipart/form-data` with a single `file` part
    Multipart { file_name: String, bytes: Vec<u8> },
}

/// A single request against the ADCM REST API
///
/// `path` is relative to the ADCM base URL and starts with `/api/v1/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Get,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            path: path.into(),
            body: RequestBody::Json(body),
        }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Put,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Delete,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn upload(path: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            method: ApiMethod::Post,
            path: path.into(),
            body: RequestBody::Multipart {
                file_name: file_name.into(),
                bytes,
            },
        }
    }

    /// JSON body, if any
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// AdcmTransport port for issuing authenticated requests to ADCM
///
/// Implementations attach credentials, send the request and decode the
/// response body as JSON.
pub trait AdcmTransport {
    /// Sends `request` and returns the decoded response body
    ///
    /// # Returns
    /// The JSON body of a 2xx response, or `Value::Null` when it is empty
    ///
    /// # Errors
    /// - `Transport` for network failures and non-2xx statuses
    /// - `MalformedResponse` when the body is not valid JSON
    fn send(&self, request: ApiRequest) -> Result<Value>;
}

impl<T: AdcmTransport + ?Sized> AdcmTransport for &T {
    fn send(&self, request: ApiRequest) -> Result<Value> {
        (**self).send(request)
    }
}

impl<T: AdcmTransport + ?Sized> AdcmTransport for Box<T> {
    fn send(&self, request: ApiRequest) -> Result<Value> {
        (**self).send(request)
    }
}
