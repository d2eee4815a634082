use crate::shared::error::AdcmError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size (1 MB). Manifests are small YAML documents.
pub const MAX_MANIFEST_SIZE: u64 = 1024 * 1024;

/// Maximum bundle archive size accepted for upload (512 MB)
pub const MAX_BUNDLE_SIZE: u64 = 512 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        AdcmError::validation(format!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        ))
    })?;

    if metadata.is_symlink() {
        return Err(AdcmError::validation(format!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        )));
    }

    if !metadata.is_file() {
        return Err(AdcmError::validation(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    Ok(metadata.len())
}

/// Validates a size against a limit
pub fn validate_size(size: u64, what: &str, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(AdcmError::validation(format!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            what, size, max_size
        )));
    }
    Ok(())
}

/// Validates a bundle file name before it is sent to `stack/load/`
///
/// The name is echoed back to ADCM as a server-side file reference, so path
/// separators and traversal sequences are rejected.
pub fn validate_bundle_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty() {
        return Err(AdcmError::validation(
            "Bundle URL does not end with a file name",
        ));
    }

    if file_name.contains('/') || file_name.contains('\\') {
        return Err(AdcmError::validation(format!(
            "Security: bundle file name '{}' contains path separators",
            file_name
        )));
    }

    if file_name.contains("..") {
        return Err(AdcmError::validation(format!(
            "Security: bundle file name '{}' contains '..'",
            file_name
        )));
    }

    if file_name.contains('#') || file_name.contains('?') || file_name.contains('@') {
        return Err(AdcmError::validation(format!(
            "Security: bundle file name '{}' contains URL-unsafe characters",
            file_name
        )));
    }

    Ok(())
}
