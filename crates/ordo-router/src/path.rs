//! Path utilities for validation and normalization.
//!
//! All functions are pure: same input, same output, no side effects.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except the root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use ordo_router::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/orders/new"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("orders")); // missing leading /
/// assert!(!is_canonical("/orders/")); // trailing /
/// assert!(!is_canonical("/orders//new")); // empty segment
/// ```
pub fn is_canonical(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }
    if path.contains("//") {
        return false;
    }
    path == "/" || !path.ends_with('/')
}

/// Normalizes a location path to canonical form.
///
/// Zero-copy when the input is already canonical (`Cow::Borrowed`), a single
/// allocation otherwise. Trailing slashes and empty segments are removed, a
/// missing leading separator is added, and empty input maps to the root.
///
/// # Examples
///
/// ```
/// use ordo_router::normalize;
/// use std::borrow::Cow;
///
/// let path = normalize("/orders/new");
/// assert!(matches!(path, Cow::Borrowed("/orders/new")));
///
/// assert_eq!(normalize("/orders/new/"), "/orders/new");
/// assert_eq!(normalize("/orders//new"), "/orders/new");
/// assert_eq!(normalize(""), "/");
/// assert_eq!(normalize("///"), "/");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

/// Splits a canonical path into its non-empty segments.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
