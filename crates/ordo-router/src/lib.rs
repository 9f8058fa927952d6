//! # Ordo Router
//!
//! Declarative route resolution for single-page navigation:
//! - Ordered route table with first-match-wins semantics
//! - Tagged route targets: a view handle or a redirect to another path
//! - Transparent redirect chains with a configurable hop limit
//! - Named routes for navigation independent of the URL shape
//! - Dynamic parameters (`/orders/:id`) matched and expanded
//!
//! The crate is pure: resolution is a function over the table with no side
//! effects, so it can be tested without any history or UI dependency. The
//! view handle type is generic and opaque. The router never constructs or
//! inspects a view, it only hands the handle back to the caller.
//!
//! ## Example
//!
//! ```
//! use ordo_router::{RouteDef, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(RouteDef::redirect("/", "/orders/history"))
//!     .route(RouteDef::view("/orders/history", "history").named("order-history"))
//!     .build()
//!     .unwrap();
//!
//! let resolved = table.resolve("/").unwrap();
//! assert_eq!(resolved.path(), "/orders/history");
//! assert_eq!(*resolved.view(), "history");
//! ```

mod error;
pub mod path;
mod pattern;
mod table;

pub use error::RouterError;
pub use path::{is_canonical, normalize};
pub use pattern::{Params, Pattern};
pub use table::{Resolution, RouteDef, RouteTable, RouteTableBuilder, RouteTarget, DEFAULT_HOP_LIMIT};
