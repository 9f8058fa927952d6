//! The route table: ordered definitions, name index, and resolution.

use std::collections::HashMap;

use crate::error::RouterError;
use crate::path::normalize;
use crate::pattern::{Params, Pattern};

/// Default number of redirect hops permitted before resolution fails.
pub const DEFAULT_HOP_LIMIT: usize = 10;

/// What a route resolves to. Exactly one kind per definition.
///
/// `V` is the host's view handle. The router holds it only to hand it back
/// on a successful resolution; its internals are the host's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget<V> {
    /// A mountable view owned by the host application.
    View(V),
    /// Another path that must itself resolve to a view, transparently.
    Redirect(String),
}

/// One entry of the route table: a pattern, an optional unique name, and a
/// target.
///
/// # Examples
///
/// ```
/// use ordo_router::RouteDef;
///
/// let def = RouteDef::view("/orders/new", "form").named("new-order");
/// assert_eq!(def.pattern().as_str(), "/orders/new");
/// assert_eq!(def.name(), Some("new-order"));
///
/// let def: RouteDef<&str> = RouteDef::redirect("/", "/orders/history");
/// assert!(def.name().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RouteDef<V> {
    pattern: Pattern,
    name: Option<String>,
    target: RouteTarget<V>,
}

impl<V> RouteDef<V> {
    /// A route that resolves to a host view.
    pub fn view(pattern: &str, view: V) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            name: None,
            target: RouteTarget::View(view),
        }
    }

    /// A route whose resolution substitutes another path before a view is
    /// chosen. The target path is normalized up front.
    pub fn redirect(pattern: &str, to: impl Into<String>) -> Self {
        let to = normalize(&to.into()).into_owned();
        Self {
            pattern: Pattern::parse(pattern),
            name: None,
            target: RouteTarget::Redirect(to),
        }
    }

    /// Names this route for navigation independent of its path. Names must
    /// be unique per table; the builder enforces that.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target(&self) -> &RouteTarget<V> {
        &self.target
    }
}

/// Outcome of a successful resolution.
///
/// `path` is the final path after any redirects; the originally requested
/// path is deliberately not carried, redirects are transparent substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<V> {
    path: String,
    name: Option<String>,
    params: Params,
    view: V,
}

impl<V> Resolution<V> {
    /// The resolved, post-redirect path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The matched definition's name, when it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parameters captured from dynamic segments.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The view handle to hand to the mount point.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Ordered route table with first-match-wins resolution.
///
/// Built once through [`RouteTable::builder`]; the builder fails fast on
/// duplicate names, so a constructed table always has a consistent name
/// index. Resolution is pure, all history and state concerns live with the
/// caller.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    defs: Vec<RouteDef<V>>,
    names: HashMap<String, usize>,
    hop_limit: usize,
}

/// Chaining builder for [`RouteTable`].
///
/// # Examples
///
/// ```
/// use ordo_router::{RouteDef, RouteTable};
///
/// let table = RouteTable::builder()
///     .route(RouteDef::redirect("/", "/orders/history"))
///     .route(RouteDef::view("/orders/history", "history").named("order-history"))
///     .build()
///     .unwrap();
/// assert_eq!(table.defs().len(), 2);
/// ```
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    defs: Vec<RouteDef<V>>,
    hop_limit: usize,
}

impl<V> RouteTableBuilder<V> {
    /// Appends a definition. Table order is the tie-break when patterns
    /// overlap: the earliest matching definition wins.
    pub fn route(mut self, def: RouteDef<V>) -> Self {
        self.defs.push(def);
        self
    }

    /// Overrides [`DEFAULT_HOP_LIMIT`] for redirect chains.
    pub fn hop_limit(mut self, limit: usize) -> Self {
        self.hop_limit = limit;
        self
    }

    /// Validates the definitions and produces the table.
    ///
    /// Fails with [`RouterError::DuplicateName`] when two definitions share
    /// a name. This is fatal by design: resolution never runs against an
    /// ambiguous name index.
    pub fn build(self) -> Result<RouteTable<V>, RouterError> {
        let mut names = HashMap::new();
        for (idx, def) in self.defs.iter().enumerate() {
            if let Some(name) = def.name() {
                if names.insert(name.to_string(), idx).is_some() {
                    return Err(RouterError::DuplicateName {
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(RouteTable {
            defs: self.defs,
            names,
            hop_limit: self.hop_limit,
        })
    }
}

impl<V: Clone> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder {
            defs: Vec::new(),
            hop_limit: DEFAULT_HOP_LIMIT,
        }
    }

    /// All definitions, in table order.
    pub fn defs(&self) -> &[RouteDef<V>] {
        &self.defs
    }

    /// The configured redirect hop limit.
    pub fn hop_limit(&self) -> usize {
        self.hop_limit
    }

    /// Looks up a definition by name.
    pub fn def_by_name(&self, name: &str) -> Option<&RouteDef<V>> {
        self.names.get(name).map(|idx| &self.defs[*idx])
    }

    /// First definition whose pattern matches the path, in table order.
    fn match_path(&self, path: &str) -> Option<(&RouteDef<V>, Params)> {
        self.defs
            .iter()
            .find_map(|def| def.pattern.matches(path).map(|params| (def, params)))
    }

    /// Resolves a path to a view, following redirects.
    ///
    /// Scans the table in order and selects the first matching definition.
    /// Redirect targets are resolved transitively; after `hop_limit` hops
    /// without reaching a view the chain is considered a loop. Deterministic
    /// and idempotent for an unchanged table.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotFound`] when no definition matches the requested
    /// path or an intermediate redirect target; `requested` always carries
    /// the original path, `failed_at` the path that matched nothing.
    /// [`RouterError::RedirectLoop`] when the hop limit is exceeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordo_router::{RouteDef, RouteTable, RouterError};
    ///
    /// let table = RouteTable::builder()
    ///     .route(RouteDef::view("/orders/new", "form"))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(*table.resolve("/orders/new").unwrap().view(), "form");
    /// assert_eq!(
    ///     table.resolve("/missing").unwrap_err(),
    ///     RouterError::NotFound {
    ///         requested: "/missing".to_string(),
    ///         failed_at: "/missing".to_string(),
    ///     },
    /// );
    /// ```
    pub fn resolve(&self, path: &str) -> Result<Resolution<V>, RouterError> {
        let start = normalize(path).into_owned();
        let mut current = start.clone();

        // hop_limit redirects means hop_limit + 1 table lookups.
        for _ in 0..=self.hop_limit {
            let Some((def, params)) = self.match_path(&current) else {
                return Err(RouterError::NotFound {
                    requested: start,
                    failed_at: current,
                });
            };
            match def.target() {
                RouteTarget::View(view) => {
                    return Ok(Resolution {
                        path: current,
                        name: def.name.clone(),
                        params,
                        view: view.clone(),
                    });
                }
                RouteTarget::Redirect(to) => {
                    current = to.clone();
                }
            }
        }

        Err(RouterError::RedirectLoop {
            start,
            limit: self.hop_limit,
        })
    }

    /// Resolves a route by name, constructing its concrete path first.
    ///
    /// The constructed path then goes through [`resolve`](Self::resolve), so
    /// named navigation and path navigation are indistinguishable from the
    /// result's point of view.
    ///
    /// # Errors
    ///
    /// [`RouterError::UnknownName`] when no definition carries the name,
    /// [`RouterError::MissingParam`] when the pattern needs a parameter the
    /// caller did not supply, plus anything [`resolve`](Self::resolve)
    /// returns.
    pub fn resolve_name(&self, name: &str, params: &Params) -> Result<Resolution<V>, RouterError> {
        let def = self.def_by_name(name).ok_or_else(|| RouterError::UnknownName {
            name: name.to_string(),
        })?;
        let path = def.pattern.expand(params)?;
        self.resolve(&path)
    }
}
