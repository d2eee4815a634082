use crate::application::dto::ResourceManifest;
use crate::shared::security::{validate_regular_file, validate_size, MAX_MANIFEST_SIZE};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// ManifestReader adapter loading resource definitions from YAML files
///
/// Applies the same file checks as every other local read:
/// - Reject symbolic links
/// - Validate the path is a regular file
/// - Enforce the manifest size limit
pub struct ManifestReader;

impl ManifestReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<ResourceManifest> {
        let size = validate_regular_file(path, "Manifest file")?;
        validate_size(size, "Manifest file", MAX_MANIFEST_SIZE)?;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid resource manifest {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<ResourceManifest> {
        let manifest: ResourceManifest = serde_yaml_ng::from_str(content)?;
        Ok(manifest)
    }
}

impl Default for ManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ResourceKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_cluster_manifest_with_inline_topology() {
        let manifest = ManifestReader::parse(
            r#"
kind: cluster
name: analytics
bundle_id: 5
cluster_config:
  a:
    y: 9
hc_map:
  host1.local:
    - svcA: [comp1, comp2]
"#,
        )
        .unwrap();

        let ResourceManifest::Cluster(model) = manifest else {
            panic!("Expected cluster manifest");
        };
        let spec = model.to_spec().unwrap();
        assert_eq!(spec.hc_map["host1.local"][0]["svcA"], vec!["comp1", "comp2"]);
        assert_eq!(spec.cluster_config.unwrap()["a"]["y"], serde_json::json!(9));
    }

    #[test]
    fn test_parse_json_text_attribute() {
        let manifest = ManifestReader::parse(
            "kind: host\nfqdn: host1.local\nprovider_id: 7\nconfig: '{\"ansible_user\": \"root\"}'\n",
        )
        .unwrap();
        assert_eq!(manifest.kind(), ResourceKind::Host);
    }

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "kind: bundle\nurl: https://example.com/adpg.tgz").unwrap();

        let manifest = ManifestReader::new().read(file.path()).unwrap();
        assert_eq!(manifest.kind(), ResourceKind::Bundle);
    }

    #[test]
    fn test_read_missing_file() {
        let result = ManifestReader::new().read(Path::new("/nonexistent/manifest.yml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_kind_is_an_error() {
        let result = ManifestReader::parse("name: analytics\nbundle_id: 5\n");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_manifest_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.yml");
        fs::write(&target, "kind: bundle\nurl: https://example.com/b.tgz\n").unwrap();
        let link = dir.path().join("link.yml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = ManifestReader::new().read(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
