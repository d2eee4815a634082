use crate::shared::Result;

/// A downloaded bundle archive ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct BundleArchive {
    /// File name under which ADCM stores the upload
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// BundleSource port for fetching bundle archives
///
/// Bundles are referenced by URL in resource definitions; this port hides
/// how the archive is retrieved.
pub trait BundleSource {
    /// Fetches the archive at `url`
    ///
    /// # Errors
    /// Returns an error if the archive cannot be downloaded or its file name
    /// cannot be derived from the URL
    fn fetch(&self, url: &str) -> Result<BundleArchive>;
}

/// Last path segment of a bundle URL, ignoring query and fragment
pub fn file_name_from_url(url: &str) -> &str {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    without_query.rsplit('/').next().unwrap_or(without_query)
}
