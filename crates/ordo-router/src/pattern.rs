//! Route pattern parsing, matching, and expansion.
//!
//! A pattern is a sequence of typed segments. The patterns in a service-order
//! table are literal, but `:param` segments are fully supported so routes
//! like `/orders/:id` can be added without touching call sites.

use std::collections::HashMap;

use crate::error::RouterError;
use crate::path::{normalize, segments};

/// Parameter values captured while matching, keyed by segment name.
pub type Params = HashMap<String, String>;

/// One typed segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Static text, matched verbatim.
    Literal(String),
    /// Dynamic `:name` segment, captures the path segment at its position.
    Param(String),
}

/// A parsed URL pattern.
///
/// Matching is segment-wise and exact in length: a pattern neither matches
/// prefixes nor suffixes of a path. The root pattern `/` has zero segments
/// and matches only the root path.
///
/// # Examples
///
/// ```
/// use ordo_router::Pattern;
///
/// let pattern = Pattern::parse("/orders/:id");
/// let params = pattern.matches("/orders/42").unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
/// assert!(pattern.matches("/orders").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segs: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string. The input is normalized first, so
    /// `"/orders/"` and `"/orders"` produce the same pattern.
    pub fn parse(pattern: &str) -> Self {
        let raw = normalize(pattern).into_owned();
        let segs = segments(&raw)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(seg.to_string()),
            })
            .collect();
        Self { raw, segs }
    }

    /// The canonical pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the pattern has no dynamic segments.
    pub fn is_literal(&self) -> bool {
        self.segs.iter().all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Matches a path against this pattern.
    ///
    /// Returns the captured parameters on success (empty for literal
    /// patterns), `None` when the path does not match. The path is
    /// normalized before comparison.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path = normalize(path);
        let parts: Vec<&str> = segments(&path).collect();
        if parts.len() != self.segs.len() {
            return None;
        }

        let mut params = Params::new();
        for (seg, part) in self.segs.iter().zip(&parts) {
            match seg {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }

    /// Builds a concrete path from this pattern and parameter values.
    ///
    /// The inverse of [`matches`](Self::matches), used for navigation by
    /// name. Fails with [`RouterError::MissingParam`] when a `:param`
    /// segment has no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordo_router::{Params, Pattern};
    ///
    /// let pattern = Pattern::parse("/orders/:id");
    /// let mut params = Params::new();
    /// params.insert("id".to_string(), "42".to_string());
    /// assert_eq!(pattern.expand(&params).unwrap(), "/orders/42");
    /// ```
    pub fn expand(&self, params: &Params) -> Result<String, RouterError> {
        if self.segs.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::new();
        for seg in &self.segs {
            out.push('/');
            match seg {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => match params.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(RouterError::MissingParam { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}
