//! Locating and reading pyproject.toml

use crate::error::ManifestError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Check that the manifest at `path` exists and is a regular file
pub fn locate_manifest(path: &Path) -> Result<(), ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::not_found(path));
    }

    log::debug!("Found manifest at {}", path.display());
    Ok(())
}

/// Read a manifest file content
///
/// Content that is not UTF-8 cannot be TOML and is reported as a parse error.
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(path),
        ErrorKind::InvalidData => ManifestError::toml_parse_error(path, e.to_string()),
        _ => ManifestError::read_error(path, e),
    })
}

/// Write content to a manifest file, replacing it entirely
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
