//! End-to-end navigation tests against the real service-order table.

use ordo_app::{build_navigator, service_order_routes, AppView, NavConfig};
use ordo_nav::{MemoryHistory, Navigator};
use ordo_router::{RouteDef, RouteTable, RouterError, DEFAULT_HOP_LIMIT};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn navigator() -> Navigator<AppView, MemoryHistory> {
    build_navigator(&NavConfig::default()).unwrap()
}

#[rstest]
#[case("/orders/new", AppView::OrderForm, "new-order")]
#[case("/orders/manage", AppView::OrderManagement, "manage-orders")]
#[case("/orders/history", AppView::OrderHistory, "order-history")]
fn every_table_path_resolves_to_its_view(
    #[case] path: &str,
    #[case] view: AppView,
    #[case] name: &str,
) {
    let mut nav = navigator();
    let state = nav.navigate(path).unwrap();
    assert_eq!(state.path(), path);
    assert_eq!(*state.view(), view);
    assert_eq!(state.name(), Some(name));
}

#[test]
fn root_is_the_order_history() {
    let mut nav = navigator();
    nav.navigate("/").unwrap();

    let state = nav.current().unwrap().clone();
    assert_eq!(state.path(), "/orders/history");
    assert_eq!(*state.view(), AppView::OrderHistory);

    let mut direct = navigator();
    direct.navigate("/orders/history").unwrap();
    assert_eq!(direct.current().unwrap(), &state);

    // The root path never appears as a history entry.
    assert_eq!(nav.history().entries(), ["/orders/history"]);
}

#[test]
fn named_navigation_equals_path_navigation() {
    let mut by_name = navigator();
    by_name.navigate_to("new-order").unwrap();

    let mut by_path = navigator();
    by_path.navigate("/orders/new").unwrap();

    assert_eq!(by_name.current().unwrap(), by_path.current().unwrap());
}

#[test]
fn unknown_path_leaves_state_unchanged() {
    let mut nav = navigator();
    nav.navigate("/orders/history").unwrap();
    let before = nav.current().unwrap().clone();

    let err = nav.navigate("/unknown").unwrap_err();
    assert_eq!(
        err,
        RouterError::NotFound {
            requested: "/unknown".to_string(),
            failed_at: "/unknown".to_string(),
        }
    );
    assert_eq!(nav.current().unwrap(), &before);
}

#[test]
fn duplicate_names_fail_before_any_resolution() {
    let err = RouteTable::builder()
        .route(RouteDef::view("/orders/new", AppView::OrderForm).named("new-order"))
        .route(RouteDef::view("/orders/clone", AppView::OrderForm).named("new-order"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        RouterError::DuplicateName {
            name: "new-order".to_string()
        }
    );
}

#[test]
fn synthetic_redirect_cycle_fails_instead_of_hanging() {
    let table: RouteTable<AppView> = RouteTable::builder()
        .route(RouteDef::redirect("/a", "/b"))
        .route(RouteDef::redirect("/b", "/a"))
        .build()
        .unwrap();
    let mut nav = Navigator::new(table, MemoryHistory::new());

    let err = nav.navigate("/a").unwrap_err();
    assert_eq!(
        err,
        RouterError::RedirectLoop {
            start: "/a".to_string(),
            limit: DEFAULT_HOP_LIMIT
        }
    );
    assert!(nav.current().is_none());
}

#[test]
fn only_the_latest_navigation_is_current() {
    let mut nav = navigator();
    nav.navigate("/orders/new").unwrap();
    nav.navigate("/orders/manage").unwrap();

    let state = nav.current().unwrap();
    assert_eq!(state.path(), "/orders/manage");
    assert_eq!(state.name(), Some("manage-orders"));
    assert_eq!(*state.view(), AppView::OrderManagement);
}

#[test]
fn configured_hop_limit_reaches_the_table() {
    let table = service_order_routes(0).unwrap();

    // With zero hops allowed, the root redirect itself is over the limit.
    let err = table.resolve("/").unwrap_err();
    assert_eq!(
        err,
        RouterError::RedirectLoop {
            start: "/".to_string(),
            limit: 0
        }
    );
    assert_eq!(
        *table.resolve("/orders/history").unwrap().view(),
        AppView::OrderHistory
    );
}
