//! Service-order SPA navigation, built on `ordo-router` and `ordo-nav`.
//!
//! This crate owns what the navigation core treats as opaque: the three
//! application views and the declarative route table that maps paths and
//! names onto them. The root path is an unconditional redirect to the order
//! history, the default entry point on initial load.

use ordo_nav::{MemoryHistory, Navigator};
use ordo_router::{RouteDef, RouteTable, RouterError};

mod config;

pub use config::{NavConfig, NavigationConfig};

/// The application's mountable views.
///
/// Handles only: the navigator hands them back on resolution and the host
/// mounts whatever they stand for. Their rendering lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Order creation form.
    OrderForm,
    /// Order management grid.
    OrderManagement,
    /// Order history list.
    OrderHistory,
}

/// The service-order route table.
///
/// | path              | name            | target                     |
/// |-------------------|-----------------|----------------------------|
/// | `/`               |                 | redirect `/orders/history` |
/// | `/orders/new`     | `new-order`     | [`AppView::OrderForm`]     |
/// | `/orders/manage`  | `manage-orders` | [`AppView::OrderManagement`] |
/// | `/orders/history` | `order-history` | [`AppView::OrderHistory`]  |
pub fn service_order_routes(hop_limit: usize) -> Result<RouteTable<AppView>, RouterError> {
    RouteTable::builder()
        .hop_limit(hop_limit)
        .route(RouteDef::redirect("/", "/orders/history"))
        .route(RouteDef::view("/orders/new", AppView::OrderForm).named("new-order"))
        .route(RouteDef::view("/orders/manage", AppView::OrderManagement).named("manage-orders"))
        .route(RouteDef::view("/orders/history", AppView::OrderHistory).named("order-history"))
        .build()
}

/// Builds the application navigator from configuration, backed by an
/// in-memory history.
pub fn build_navigator(config: &NavConfig) -> Result<Navigator<AppView, MemoryHistory>, RouterError> {
    let table = service_order_routes(config.navigation.redirect_limit)?;
    Ok(Navigator::new(table, MemoryHistory::new()))
}
