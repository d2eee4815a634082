use crate::ports::outbound::bundle_source::file_name_from_url;
use crate::ports::outbound::{BundleArchive, BundleSource};
use crate::shared::error::AdcmError;
use crate::shared::security::{validate_size, MAX_BUNDLE_SIZE};
use crate::shared::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// HttpBundleSource adapter downloading bundle archives over HTTP(S)
pub struct HttpBundleSource {
    client: Client,
}

impl HttpBundleSource {
    /// Bundles can be large; downloads get a longer timeout than API calls
    const TIMEOUT_SECONDS: u64 = 600;

    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("adcm-provider/{}", version))
            .build()
            .map_err(|e| AdcmError::transport(None, format!("building HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl BundleSource for HttpBundleSource {
    fn fetch(&self, url: &str) -> Result<BundleArchive> {
        let file_name = file_name_from_url(url);
        if file_name.is_empty() {
            return Err(AdcmError::validation(format!(
                "Cannot derive a bundle file name from URL '{}'",
                url
            )));
        }

        tracing::info!(url, "Downloading bundle");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AdcmError::transport(None, format!("downloading {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdcmError::transport(
                Some(status.as_u16()),
                format!("downloading {} returned {}", url, status),
            ));
        }
        if let Some(length) = response.content_length() {
            validate_size(length, "Bundle archive", MAX_BUNDLE_SIZE)?;
        }

        let bytes = response
            .bytes()
            .map_err(|e| AdcmError::transport(None, format!("reading {}: {}", url, e)))?;
        validate_size(bytes.len() as u64, "Bundle archive", MAX_BUNDLE_SIZE)?;

        Ok(BundleArchive {
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_file_name_is_rejected_before_download() {
        let source = HttpBundleSource::new().unwrap();
        let err = source.fetch("http://127.0.0.1:9/bundles/").unwrap_err();
        assert!(matches!(err, AdcmError::Validation { .. }));
    }
}
