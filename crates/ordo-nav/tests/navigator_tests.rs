//! Integration tests for the navigator: state commits, history writes,
//! subscriptions, and external change handling.

use std::cell::RefCell;
use std::rc::Rc;

use ordo_nav::{History, MemoryHistory, Navigator};
use ordo_router::{RouteDef, RouteTable, RouterError};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Form,
    Grid,
    List,
}

fn navigator() -> Navigator<View, MemoryHistory> {
    let table = RouteTable::builder()
        .route(RouteDef::redirect("/", "/orders/history"))
        .route(RouteDef::view("/orders/new", View::Form).named("new-order"))
        .route(RouteDef::view("/orders/manage", View::Grid).named("manage-orders"))
        .route(RouteDef::view("/orders/history", View::List).named("order-history"))
        .build()
        .unwrap();
    Navigator::new(table, MemoryHistory::new())
}

#[test]
fn first_navigation_creates_state() {
    let mut nav = navigator();
    assert!(nav.current().is_none());

    nav.navigate("/orders/new").unwrap();
    let state = nav.current().unwrap();
    assert_eq!(state.path(), "/orders/new");
    assert_eq!(state.name(), Some("new-order"));
    assert_eq!(*state.view(), View::Form);
}

#[test]
fn root_redirect_is_transparent_in_state_and_history() {
    let mut nav = navigator();
    nav.navigate("/").unwrap();

    let state = nav.current().unwrap();
    assert_eq!(state.path(), "/orders/history");
    assert_eq!(*state.view(), View::List);

    // The pre-redirect path never reaches history.
    assert_eq!(nav.history().entries(), ["/orders/history"]);
}

#[test]
fn named_and_path_navigation_yield_identical_state() {
    let mut nav = navigator();
    nav.navigate_to("new-order").unwrap();
    let by_name = nav.current().unwrap().clone();

    let mut nav = navigator();
    nav.navigate("/orders/new").unwrap();
    let by_path = nav.current().unwrap().clone();

    assert_eq!(by_name, by_path);
}

#[test]
fn failed_navigation_mutates_nothing() {
    let mut nav = navigator();
    nav.navigate("/orders/manage").unwrap();
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
    assert_eq!(nav.history().entries(), ["/orders/manage"]);
}

#[test]
fn failed_navigation_before_first_state_leaves_none() {
    let mut nav = navigator();
    assert!(nav.navigate("/unknown").is_err());
    assert!(nav.current().is_none());
    assert!(nav.history().entries().is_empty());
}

#[test]
fn sequential_navigations_keep_only_the_last_state() {
    let mut nav = navigator();
    nav.navigate("/orders/new").unwrap();
    nav.navigate("/orders/manage").unwrap();

    let state = nav.current().unwrap();
    assert_eq!(state.path(), "/orders/manage");
    assert_eq!(*state.view(), View::Grid);
    assert_eq!(nav.history().entries(), ["/orders/new", "/orders/manage"]);
}

#[test]
fn subscribers_observe_every_commit_and_nothing_on_failure() {
    let mut nav = navigator();
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    nav.subscribe(move |state| sink.borrow_mut().push(state.path().to_string()));

    nav.navigate("/").unwrap();
    nav.navigate("/orders/new").unwrap();
    let _ = nav.navigate("/unknown");

    assert_eq!(*seen.borrow(), ["/orders/history", "/orders/new"]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut nav = navigator();
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let id = nav.subscribe(move |state| sink.borrow_mut().push(state.path().to_string()));

    nav.navigate("/orders/new").unwrap();
    nav.unsubscribe(id);
    nav.navigate("/orders/manage").unwrap();

    assert_eq!(*seen.borrow(), ["/orders/new"]);
}

#[test]
fn back_and_forward_resync_through_the_resolver() {
    let mut nav = navigator();
    nav.navigate("/orders/history").unwrap();
    nav.navigate("/orders/new").unwrap();

    let back = nav.history_mut().back().unwrap();
    nav.sync(&back).unwrap();
    assert_eq!(nav.current().unwrap().path(), "/orders/history");

    let forward = nav.history_mut().forward().unwrap();
    nav.sync(&forward).unwrap();
    assert_eq!(nav.current().unwrap().path(), "/orders/new");

    // Sync itself writes no new entries.
    assert_eq!(
        nav.history().entries(),
        ["/orders/history", "/orders/new"]
    );
}

#[test]
fn sync_replaces_history_when_a_redirect_rewrites_the_path() {
    let mut nav = navigator();

    // Direct URL entry on the root: the environment already shows "/", the
    // navigator must end up showing the redirect target instead.
    nav.history_mut().push("/");
    nav.sync("/").unwrap();

    assert_eq!(nav.current().unwrap().path(), "/orders/history");
    assert_eq!(nav.history().entries(), ["/orders/history"]);
}

#[test]
fn sync_failure_leaves_state_untouched() {
    let mut nav = navigator();
    nav.navigate("/orders/manage").unwrap();

    assert!(nav.sync("/nowhere").is_err());
    assert_eq!(nav.current().unwrap().path(), "/orders/manage");
}

#[test]
fn navigate_accepts_non_canonical_paths() {
    let mut nav = navigator();
    nav.navigate("/orders/new/").unwrap();
    assert_eq!(nav.current().unwrap().path(), "/orders/new");
    assert_eq!(nav.history().entries(), ["/orders/new"]);
}
