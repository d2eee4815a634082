/// Filesystem adapters for local resource manifests
mod manifest_reader;

pub use manifest_reader::ManifestReader;
