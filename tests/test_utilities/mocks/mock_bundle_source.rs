use adcm_provider::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock BundleSource serving archives from memory and recording fetched URLs
#[derive(Default, Clone)]
pub struct MockBundleSource {
    archives: HashMap<String, BundleArchive>,
    pub fetched: Arc<Mutex<Vec<String>>>,
}

impl MockBundleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archive(mut self, url: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.archives.insert(
            url.to_string(),
            BundleArchive {
                file_name: file_name.to_string(),
                bytes: bytes.to_vec(),
            },
        );
        self
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl BundleSource for MockBundleSource {
    fn fetch(&self, url: &str) -> Result<BundleArchive> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.archives
            .get(url)
            .cloned()
            .ok_or_else(|| AdcmError::transport(Some(404), format!("downloading {}", url)))
    }
}
