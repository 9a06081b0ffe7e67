//! Root application module.
//!
//! Contains the main App component and the AppContext that owns the router
//! and the route table for the lifetime of the application.
//!
//! Routes match `location.pathname` literally, so the app has to be served
//! from the site root. Hosted under a sub-path, every page resolves to the
//! not-found fallback.

use leptos::prelude::*;
use pagenav_core::{RouteError, RouteTable, Router};

use crate::components::RouterOutlet;
use crate::config::{ConfigError, RouteConfig, load_routes};
use crate::models::Page;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide routing context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()` (usually through [`crate::hooks::use_router`]).
///
/// # Note
///
/// [`Router`] is single-threaded, so it lives in local storage. Both fields
/// are arena handles, which keeps this struct `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation state and subscribers.
    pub router: StoredValue<Router, LocalStorage>,

    /// Path to page mapping, fixed after startup.
    pub routes: StoredValue<RouteTable<Page>>,
}

impl AppContext {
    /// Build the route table and router from `config`.
    ///
    /// In the browser the router starts at the current location so deep links
    /// work, and is kept in sync with the History API.
    pub fn new(config: &RouteConfig) -> Result<Self, ConfigError> {
        let routes = config.route_table()?;
        let router = Router::new(initial_path(config))?;

        #[cfg(target_arch = "wasm32")]
        crate::utils::history::sync_with_browser(&router);

        Ok(Self {
            router: StoredValue::new_local(router),
            routes: StoredValue::new(routes),
        })
    }

    /// Resolve `path` to the page registered for it.
    pub fn resolve(&self, path: &str) -> Result<Page, RouteError> {
        self.routes.with_value(|routes| routes.resolve(path).copied())
    }
}

#[cfg(target_arch = "wasm32")]
fn initial_path(config: &RouteConfig) -> String {
    crate::utils::history::location_path()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| config.initial_path.clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_path(config: &RouteConfig) -> String {
    config.initial_path.clone()
}

/// Root application component.
///
/// Loads the route configuration, provides the [`AppContext`], and renders
/// the page for the current path. A broken route configuration stops the app
/// here rather than surfacing later as a missing page.
#[component]
pub fn App() -> impl IntoView {
    let ctx = load_routes()
        .and_then(|config| AppContext::new(&config))
        .expect("Invalid route configuration");
    provide_context(ctx);

    view! {
        <main class=css::app>
            <RouterOutlet />
        </main>
    }
}
