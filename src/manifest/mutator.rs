//! Targeted removal of dependency declarations from pyproject.toml
//!
//! The manifest is never re-serialized: each declaration is located as a
//! quoted requirement token in the raw text and cut out together with its
//! list separator, so comments, key order and unrelated tables keep their
//! exact bytes.

use crate::error::ManifestError;
use crate::manifest::{read_manifest, write_manifest};
use regex::Regex;
use std::ops::Range;
use std::path::Path;

/// Matches `"name"` or `"name<specifier>"` in either quote style
fn requirement_pattern(name: &str) -> Result<Regex, ManifestError> {
    let escaped = regex::escape(name);
    let pattern =
        format!(r#""{escaped}(?:\s*[=<>!~][^"\n]*)?"|'{escaped}(?:\s*[=<>!~][^'\n]*)?'"#);
    Regex::new(&pattern).map_err(|e| ManifestError::invalid_pattern(name, e))
}

/// Remove the declarations of `names` from `content`.
///
/// Each name must occur exactly once as a quoted requirement. The first
/// name that is missing or duplicated aborts the whole batch.
pub fn excise_dependencies(
    content: &str,
    names: &[&str],
    path: &Path,
) -> Result<String, ManifestError> {
    let mut text = content.to_string();

    for name in names {
        let re = requirement_pattern(name)?;
        let matches: Vec<Range<usize>> = re.find_iter(&text).map(|m| m.range()).collect();

        let token = match matches.as_slice() {
            [] => return Err(ManifestError::dependency_not_found(*name, path)),
            [single] => single.clone(),
            _ => return Err(ManifestError::ambiguous_dependency(*name, path, matches.len())),
        };

        let span = removal_span(&text, token);
        log::trace!("Excising {:?} for {}", &text[span.clone()], name);
        text.replace_range(span, "");
    }

    Ok(text)
}

/// Remove the declarations of `names` from the manifest at `path` and
/// persist the result. Nothing is written unless every name was removed.
pub fn remove_dependencies(path: &Path, names: &[&str]) -> Result<usize, ManifestError> {
    let content = read_manifest(path)?;
    let updated = excise_dependencies(&content, names, path)?;

    if updated != content {
        write_manifest(path, &updated)?;
    }

    log::info!(
        "Removed {} dependency declarations from {}",
        names.len(),
        path.display()
    );
    Ok(names.len())
}

/// Extend a requirement token to the bytes that must go with it.
///
/// A token alone on its line takes the whole line (trailing comma and
/// comment included). Otherwise the following separator is taken, or the
/// preceding one when the token is the last list element.
fn removal_span(text: &str, token: Range<usize>) -> Range<usize> {
    const BLANKS: [char; 2] = [' ', '\t'];
    let Range { start, end } = token;
    let rest = &text[end..];

    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    if text[line_start..start].trim().is_empty() {
        let tail = rest.trim_start_matches(BLANKS);
        let tail = tail.strip_prefix(',').unwrap_or(tail);
        let tail = tail.trim_start_matches(BLANKS);
        let newline = tail.find('\n');
        let remainder = newline.map_or(tail, |i| &tail[..i]).trim_end_matches('\r');

        if remainder.is_empty() || remainder.starts_with('#') {
            let line_end = match newline {
                Some(i) => text.len() - tail.len() + i + 1,
                None => text.len(),
            };
            return line_start..line_end;
        }
    }

    if let Some(after_comma) = rest.trim_start_matches(BLANKS).strip_prefix(',') {
        let after = after_comma.trim_start_matches(BLANKS);
        return start..text.len() - after.len();
    }

    if let Some(head) = text[..start].trim_end_matches(BLANKS).strip_suffix(',') {
        return head.len()..end;
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn excise(content: &str, names: &[&str]) -> Result<String, ManifestError> {
        excise_dependencies(content, names, Path::new("pyproject.toml"))
    }

    #[test]
    fn test_excise_inline_first_entry() {
        let content = "[tool.x]\nfoo = \"bar\"\n\n[project]\ndependencies = [\"pkgA>=1.0\", \"pkgB==2.0\"]\n";
        let result = excise(content, &["pkgA"]).unwrap();
        assert!(result.contains("[tool.x]\nfoo = \"bar\"\n"));
        assert!(result.contains("dependencies = [\"pkgB==2.0\"]\n"));
    }

    #[test]
    fn test_excise_inline_last_entry() {
        let content = "dependencies = [\"pkgA>=1.0\", \"pkgB==2.0\"]\n";
        let result = excise(content, &["pkgB"]).unwrap();
        assert_eq!(result, "dependencies = [\"pkgA>=1.0\"]\n");
    }

    #[test]
    fn test_excise_inline_all_entries() {
        let content = "dependencies = [\"pkgA>=1.0\", \"pkgB==2.0\"]\n";
        let result = excise(content, &["pkgA", "pkgB"]).unwrap();
        assert_eq!(result, "dependencies = []\n");
    }

    #[test]
    fn test_excise_multiline_preserves_other_lines() {
        let content = r#"[project]
name = "demo"
# runtime deps
dependencies = [
    "requests>=2.28.0",  # http
    "click",
    "rich>=13"
]

[dependency-groups]
dev = [
    "pytest>=7.0",
]
"#;
        let result = excise(content, &["requests", "rich", "pytest"]).unwrap();
        assert_eq!(
            result,
            r#"[project]
name = "demo"
# runtime deps
dependencies = [
    "click",
]

[dependency-groups]
dev = [
]
"#
        );
    }

    #[test]
    fn test_excise_single_quotes() {
        let content = "dependencies = ['pkgA>=1.0', 'pkgB']\n";
        let result = excise(content, &["pkgA"]).unwrap();
        assert_eq!(result, "dependencies = ['pkgB']\n");
    }

    #[test]
    fn test_excise_crlf_lines() {
        let content = "dependencies = [\r\n    \"pkgA>=1.0\",\r\n    \"pkgB\",\r\n]\r\n";
        let result = excise(content, &["pkgA"]).unwrap();
        assert_eq!(result, "dependencies = [\r\n    \"pkgB\",\r\n]\r\n");
    }

    #[test]
    fn test_excise_does_not_match_prefix_names() {
        let content = "dependencies = [\"requests-oauthlib>=1.0\", \"requests>=2.0\"]\n";
        let result = excise(content, &["requests"]).unwrap();
        assert_eq!(result, "dependencies = [\"requests-oauthlib>=1.0\"]\n");
    }

    #[test]
    fn test_excise_with_markers_and_extras() {
        let content = r#"dependencies = [
    "pywin32>=300; sys_platform == 'win32'",
    "httpx[http2]>=0.24.0",
]
"#;
        let result = excise(content, &["pywin32", "httpx[http2]"]).unwrap();
        assert_eq!(result, "dependencies = [\n]\n");
    }

    #[test]
    fn test_excise_missing_dependency() {
        let err = excise("dependencies = [\"pkgA\"]\n", &["pkgZ"]).unwrap_err();
        assert!(matches!(err, ManifestError::DependencyNotFound { ref name, .. } if name == "pkgZ"));
    }

    #[test]
    fn test_excise_ambiguous_dependency() {
        let content = r#"[project]
dependencies = ["shared-lib>=1.0"]

[dependency-groups]
extra = ["shared-lib>=1.0"]
"#;
        let err = excise(content, &["shared-lib"]).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::AmbiguousDependency { ref name, occurrences: 2, .. } if name == "shared-lib"
        ));
    }

    #[test]
    fn test_remove_dependencies_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pyproject.toml");
        fs::write(&path, "dependencies = [\"pkgA>=1.0\", \"pkgB==2.0\"]\n").unwrap();

        let removed = remove_dependencies(&path, &["pkgA"]).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "dependencies = [\"pkgB==2.0\"]\n"
        );
    }

    #[test]
    fn test_remove_dependencies_failure_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pyproject.toml");
        let original = "dependencies = [\"pkgA>=1.0\", \"pkgB==2.0\"]\n";
        fs::write(&path, original).unwrap();

        let err = remove_dependencies(&path, &["pkgA", "missing"]).unwrap_err();
        assert!(matches!(err, ManifestError::DependencyNotFound { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
