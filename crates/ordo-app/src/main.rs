//! Demo wiring for the service-order navigator.
//!
//! Drives the default entry redirect, a couple of named navigations, and a
//! history back-step, logging every committed state through a subscriber.

use anyhow::Result;
use ordo_app::{build_navigator, NavConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = NavConfig::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        NavConfig::default()
    });

    let mut nav = build_navigator(&config)?;

    nav.subscribe(|state| {
        info!(path = %state.path(), view = ?state.view(), "mount");
    });

    // Initial load: the root redirects to the order history.
    nav.navigate(&config.navigation.initial_path)?;

    // Named navigation, the way in-app links address routes.
    nav.navigate_to("new-order")?;
    nav.navigate_to("manage-orders")?;

    // Browser back: the environment reports the previous path, the
    // navigator re-resolves it.
    if let Some(path) = nav.history_mut().back() {
        nav.sync(&path)?;
    }

    if let Some(state) = nav.current() {
        info!(path = %state.path(), "final state");
    }

    Ok(())
}
