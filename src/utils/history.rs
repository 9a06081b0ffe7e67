//! Browser History API integration.
//!
//! Keeps the address bar in step with the router:
//! - application pushes are recorded with `history.pushState`
//! - back/forward (`popstate`) are fed back into the router as restores
//!
//! Routing uses `location.pathname` as-is, so the app must be served from the
//! site root. Under a sub-path (`/app/about`) no route matches and every page
//! renders the not-found fallback.
//!
//! Everything here touches `window`, so callers gate it on `wasm32`.

use pagenav_core::{NavigationKind, Router};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::utils::log;

/// Current `location.pathname`, if a window is available.
pub fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Record `path` as a new history entry (no page reload).
///
/// Skipped when the location already shows `path`, so pushing the current
/// page again does not stack duplicate entries.
pub fn push_path(path: &str) {
    if location_path().as_deref() == Some(path) {
        return;
    }
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

/// Call `handler` with the new pathname on every `popstate` event.
pub fn on_pop_state(handler: impl Fn(String) + 'static) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(path) = location_path() {
            handler(path);
        }
    }) as Box<dyn Fn()>);

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// Wire `router` to the browser history for the rest of the app's lifetime.
pub fn sync_with_browser(router: &Router) {
    router
        .subscribe(|navigation| {
            if navigation.kind == NavigationKind::Push {
                push_path(&navigation.path);
            }
        })
        .detach();

    let weak = router.downgrade();
    on_pop_state(move |path| {
        if let Some(router) = weak.upgrade()
            && let Err(err) = router.restore(path)
        {
            log::warn(&format!("History restore failed: {}", err));
        }
    });
}
