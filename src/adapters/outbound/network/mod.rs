/// Network adapters for the ADCM API and bundle downloads
mod adcm_http_client;
mod bundle_downloader;

pub use adcm_http_client::{base_url, HttpAdcmTransport};
pub use bundle_downloader::HttpBundleSource;
