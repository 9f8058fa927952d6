use thiserror::Error;

/// Route resolution and table construction failures.
///
/// `DuplicateName` is a construction-time error: the table builder rejects it
/// before any resolution can run, so an application never starts with an
/// ambiguous name index. The remaining variants are resolution-time and
/// recoverable; the caller decides the user-visible fallback.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    /// No table entry matches. `failed_at` is the path that matched
    /// nothing; it differs from `requested` when a redirect substituted the
    /// path first, so callers can still render the URL the user asked for.
    #[error("no route matches path `{failed_at}` (requested `{requested}`)")]
    NotFound { requested: String, failed_at: String },

    /// Named navigation to a name absent from the table.
    #[error("no route named `{name}`")]
    UnknownName { name: String },

    /// A redirect chain exceeded the hop limit without reaching a view.
    #[error("redirect chain starting at `{start}` exceeded {limit} hops")]
    RedirectLoop { start: String, limit: usize },

    /// Two definitions in one table share a name.
    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },

    /// Named navigation without a value for a required `:param` segment.
    #[error("missing value for route parameter `{name}`")]
    MissingParam { name: String },
}
