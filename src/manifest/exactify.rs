//! Rewriting minimum-version pins into exact pins
//!
//! `uv add` records `name>=X.Y.Z`. With save-exact the `>=` becomes `==`.
//! Only `>=` directly after a quoted name is touched; every other operator
//! is left as written.

use crate::error::ManifestError;
use crate::manifest::{read_manifest, write_manifest};
use regex::Regex;
use std::path::Path;

/// Replace `>=` with `==` after each of `names`, returning the new content
/// and the number of rewritten pins.
pub fn exactify_content(content: &str, names: &[&str]) -> Result<(String, usize), ManifestError> {
    let mut result = content.to_string();
    let mut rewritten = 0;

    for name in names {
        let pattern = format!(r#"(["']{}\s*)>="#, regex::escape(name));
        let re = Regex::new(&pattern).map_err(|e| ManifestError::invalid_pattern(*name, e))?;

        let count = re.find_iter(&result).count();
        if count > 0 {
            result = re.replace_all(&result, "${1}==").into_owned();
            rewritten += count;
        }
    }

    Ok((result, rewritten))
}

/// Pin `names` to exact versions in the manifest at `path`
pub fn make_versions_exact(path: &Path, names: &[&str]) -> Result<usize, ManifestError> {
    let content = read_manifest(path)?;
    log::info!("Making versions exact for {} dependencies", names.len());

    let (updated, rewritten) = exactify_content(&content, names)?;
    if rewritten > 0 {
        write_manifest(path, &updated)?;
    }

    log::debug!("Rewrote {} minimum-version pins in {}", rewritten, path.display());
    Ok(rewritten)
}
