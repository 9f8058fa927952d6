//! # Ordo Nav
//!
//! The stateful shell around [`ordo_router`]: one [`Navigator`] per viewport
//! owns the route table, the current [`NavigationState`], a host-supplied
//! [`History`] capability, and the subscribers to notify on every committed
//! navigation.
//!
//! The split mirrors the table itself: resolution stays pure in
//! `ordo-router`, every side effect (state, history, callbacks) happens here,
//! and only after a resolution has fully succeeded. A failed navigation
//! mutates nothing.
//!
//! Navigation is single-threaded and never yields mid-resolution, so
//! requests are serialized by construction; externally triggered changes
//! (back/forward, direct URL entry) enter through [`Navigator::sync`] as
//! ordinary resolutions.
//!
//! ## Example
//!
//! ```
//! use ordo_nav::{MemoryHistory, Navigator};
//! use ordo_router::{RouteDef, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route(RouteDef::redirect("/", "/orders/history"))
//!     .route(RouteDef::view("/orders/history", "history").named("order-history"))
//!     .build()
//!     .unwrap();
//!
//! let mut nav = Navigator::new(table, MemoryHistory::new());
//! let state = nav.navigate("/").unwrap();
//! assert_eq!(state.path(), "/orders/history");
//! ```

use ordo_router::{normalize, Params, Resolution, RouteTable, RouterError};

mod history;

pub use history::{History, MemoryHistory};

/// The current resolved path, name, and view. The single source of truth for
/// where the application is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState<V> {
    path: String,
    name: Option<String>,
    view: V,
}

impl<V> NavigationState<V> {
    /// The committed, post-redirect path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The matched route's name, when it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The view handle the host should have mounted.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Handle returned by [`Navigator::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<V> = Box<dyn FnMut(&NavigationState<V>)>;

/// How a committed navigation is reflected in the history capability.
enum HistoryWrite {
    Push,
    Replace,
    None,
}

/// The route resolver instance: resolves paths and names against its table,
/// commits the outcome to [`NavigationState`], keeps the history capability
/// in sync, and notifies subscribers.
///
/// Construct one at application start and tear it down at unmount; a page
/// has exactly one navigable viewport, so there is exactly one navigator.
pub struct Navigator<V, H> {
    table: RouteTable<V>,
    history: H,
    state: Option<NavigationState<V>>,
    subscribers: Vec<(SubscriptionId, Callback<V>)>,
    next_subscription: u64,
}

impl<V: Clone, H: History> Navigator<V, H> {
    pub fn new(table: RouteTable<V>, history: H) -> Self {
        Self {
            table,
            history,
            state: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Resolves `path` and commits the result.
    ///
    /// On success the final (post-redirect) path is pushed to history, the
    /// navigation state is replaced, and subscribers run. Redirects are
    /// transparent: the pre-redirect path never reaches history or state.
    ///
    /// On failure nothing is mutated; the error is the caller's to render.
    pub fn navigate(&mut self, path: &str) -> Result<&NavigationState<V>, RouterError> {
        tracing::debug!(path, "navigate");
        let resolution = self.table.resolve(path).inspect_err(|err| {
            tracing::warn!(path, %err, "navigation failed");
        })?;
        Ok(self.commit(resolution, HistoryWrite::Push))
    }

    /// Resolves a named route with no parameters. See
    /// [`navigate_to_with`](Self::navigate_to_with).
    pub fn navigate_to(&mut self, name: &str) -> Result<&NavigationState<V>, RouterError> {
        self.navigate_to_with(name, &[])
    }

    /// Resolves a named route, constructing the concrete path from the
    /// route's pattern and `params`, then follows the same contract as
    /// [`navigate`](Self::navigate).
    pub fn navigate_to_with(
        &mut self,
        name: &str,
        params: &[(&str, &str)],
    ) -> Result<&NavigationState<V>, RouterError> {
        tracing::debug!(name, "navigate by name");
        let params: Params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let resolution = self.table.resolve_name(name, &params).inspect_err(|err| {
            tracing::warn!(name, %err, "navigation by name failed");
        })?;
        Ok(self.commit(resolution, HistoryWrite::Push))
    }

    /// Entry point for externally triggered path changes: the host calls
    /// this when its environment reports back/forward movement or direct
    /// URL entry.
    ///
    /// The address already reflects `path`, so history is written only when
    /// a redirect substituted the path, and then with a replace, never a
    /// push. The stale pre-redirect entry does not survive.
    pub fn sync(&mut self, path: &str) -> Result<&NavigationState<V>, RouterError> {
        tracing::debug!(path, "sync external change");
        let requested = normalize(path).into_owned();
        let resolution = self.table.resolve(&requested).inspect_err(|err| {
            tracing::warn!(path, %err, "external change failed to resolve");
        })?;
        let write = if resolution.path() == requested {
            HistoryWrite::None
        } else {
            HistoryWrite::Replace
        };
        Ok(self.commit(resolution, write))
    }

    /// Read-only snapshot of the current navigation state. `None` before
    /// the first successful navigation.
    pub fn current(&self) -> Option<&NavigationState<V>> {
        self.state.as_ref()
    }

    /// Registers a callback to run after every committed navigation.
    /// Callbacks run synchronously, in subscription order.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&NavigationState<V>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    /// The history capability, for hosts that drive it directly.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history capability, so hosts can drive
    /// back/forward movement themselves and then [`sync`](Self::sync).
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Applies a successful resolution: history write, state replacement,
    /// subscriber notification. The only place state changes.
    fn commit(&mut self, resolution: Resolution<V>, write: HistoryWrite) -> &NavigationState<V> {
        match write {
            HistoryWrite::Push => self.history.push(resolution.path()),
            HistoryWrite::Replace => self.history.replace(resolution.path()),
            HistoryWrite::None => {}
        }

        let state = NavigationState {
            path: resolution.path().to_string(),
            name: resolution.name().map(str::to_string),
            view: resolution.view().clone(),
        };
        tracing::info!(path = %state.path, name = ?state.name, "navigation committed");

        let state = self.state.insert(state);
        for (_, callback) in self.subscribers.iter_mut() {
            callback(state);
        }
        state
    }
}
