use crate::application::endpoints;
use crate::ports::outbound::{AdcmTransport, ApiMethod, ApiRequest, RequestBody};
use crate::shared::error::AdcmError;
use crate::shared::Result;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Normalizes an ADCM address into a base URL without trailing slash
///
/// A bare `host:port` is assumed to be plain HTTP.
pub fn base_url(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Shortens a response body for inclusion in an error message
fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(HttpAdcmTransport::MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

fn request_error(method: ApiMethod, path: &str, error: reqwest::Error) -> AdcmError {
    AdcmError::transport(
        error.status().map(|status| status.as_u16()),
        format!("{} {}: {}", method, path, error),
    )
}

/// HttpAdcmTransport adapter talking to the ADCM REST API over HTTP
///
/// Signs in once with the configured credentials and sends the issued token
/// with every request. Requests are not retried.
///
/// # Security
/// - Implements timeout (configurable, 30 seconds by default)
/// - Error messages carry at most a short excerpt of the response body
pub struct HttpAdcmTransport {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpAdcmTransport {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    const MAX_ERROR_BODY_CHARS: usize = 300;
    const JSON_CONTENT_TYPE: &'static str = "application/json;charset=utf-8";
    const AUTH_SCHEME: &'static str = "Bearer";

    /// Builds the HTTP client and signs in to ADCM at `host`
    ///
    /// # Errors
    /// - `Authentication` when ADCM rejects the credentials
    /// - `Transport` when ADCM cannot be reached
    pub fn connect(host: &str, username: &str, password: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("adcm-provider/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AdcmError::transport(None, format!("building HTTP client: {}", e)))?;

        let base_url = base_url(host);
        let token = Self::sign_in(&client, &base_url, username, password)?;
        tracing::debug!(base_url = %base_url, "Signed in to ADCM");

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn sign_in(client: &Client, base_url: &str, username: &str, password: &str) -> Result<String> {
        if username.is_empty() || password.is_empty() {
            return Err(AdcmError::Authentication {
                message: "username and password must both be set".to_string(),
            });
        }

        let response = client
            .post(format!("{}{}", base_url, endpoints::TOKEN))
            .form(&[("username", username), ("password", password)])
            .send()
            .map_err(|e| request_error(ApiMethod::Post, endpoints::TOKEN, e))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| request_error(ApiMethod::Post, endpoints::TOKEN, e))?;

        if status.is_client_error() {
            return Err(AdcmError::Authentication {
                message: format!("ADCM answered {}: {}", status, excerpt(&body)),
            });
        }
        if !status.is_success() {
            return Err(AdcmError::transport(
                Some(status.as_u16()),
                format!("POST {} returned {}: {}", endpoints::TOKEN, status, excerpt(&body)),
            ));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AdcmError::malformed("signing in", e))?;
        Ok(token.token)
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            ApiMethod::Get => self.client.get(url),
            ApiMethod::Post => self.client.post(url),
            ApiMethod::Put => self.client.put(url),
            ApiMethod::Delete => self.client.delete(url),
        };
        builder.header(AUTHORIZATION, self.authorization())
    }

    fn authorization(&self) -> String {
        format!("{} {}", Self::AUTH_SCHEME, self.token)
    }
}

impl AdcmTransport for HttpAdcmTransport {
    fn send(&self, request: ApiRequest) -> Result<Value> {
        let builder = self.builder(&request);
        let ApiRequest { method, path, body } = request;

        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder
                .header(CONTENT_TYPE, Self::JSON_CONTENT_TYPE)
                .body(value.to_string()),
            RequestBody::Multipart { file_name, bytes } => {
                let part = Part::bytes(bytes).file_name(file_name);
                builder.multipart(Form::new().part("file", part))
            }
        };

        let response = builder
            .send()
            .map_err(|e| request_error(method, &path, e))?;
        let status = response.status();
        let text = response.text().map_err(|e| request_error(method, &path, e))?;

        if !status.is_success() {
            return Err(AdcmError::transport(
                Some(status.as_u16()),
                format!("{} {} returned {}: {}", method, path, status, excerpt(&text)),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| AdcmError::malformed(format!("decoding {} {}", method, path), e))
    }
}
