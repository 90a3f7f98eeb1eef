//! Version specifier stripping
//!
//! A requirement string is `<name><optional specifier>`, where the specifier
//! begins at the first of `= < > ! ~`. Extras (`httpx[http2]`) are part of the
//! name as far as the package manager is concerned and are kept.

/// Characters that start a version specifier
pub const SPECIFIER_CHARS: [char; 5] = ['=', '<', '>', '!', '~'];

/// Return the part of `requirement` before its first specifier character.
///
/// `"requests>=2.0,<3.0"` becomes `"requests"`; a string without a specifier
/// is returned unchanged.
pub fn strip_specifier(requirement: &str) -> &str {
    match requirement.find(SPECIFIER_CHARS) {
        Some(idx) => &requirement[..idx],
        None => requirement,
    }
}

/// Strip every requirement in `requirements` down to its bare name.
///
/// Whitespace between the name and its specifier (`"requests >= 2.0"`) is
/// dropped, and requirements that are empty once stripped are skipped.
pub fn bare_names<S: AsRef<str>>(requirements: &[S]) -> Vec<String> {
    requirements
        .iter()
        .map(|req| strip_specifier(req.as_ref()).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
