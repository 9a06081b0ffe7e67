//! Routing hooks for view components.

use leptos::prelude::*;
use pagenav_core::{Activate, Router};

use crate::app::AppContext;
use crate::utils::log;

/// Navigation handle returned by [`use_router`].
///
/// `Copy`, so it can be moved into any number of event handlers.
#[derive(Clone, Copy)]
pub struct RouterHandle {
    router: StoredValue<Router, LocalStorage>,
}

impl RouterHandle {
    /// Navigate to `path`.
    pub fn push(&self, path: &str) {
        self.router.with_value(|router| {
            if let Err(err) = router.push(path) {
                log::warn(&format!("Navigation to '{}' failed: {}", path, err));
            }
        });
    }

    /// Run a button's activation against the router.
    pub fn activate(&self, action: &impl Activate) {
        self.router.with_value(|router| action.on_activate(router));
    }

    /// Current path snapshot (not reactive; see [`use_current_path`]).
    pub fn current(&self) -> String {
        self.router.with_value(Router::current)
    }
}

/// Access the application router.
pub fn use_router() -> RouterHandle {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    RouterHandle { router: ctx.router }
}

/// Reactive current path for the calling component.
///
/// Registers a router subscriber that lives exactly as long as the calling
/// component: the subscription is stored in the component's owner and dropped
/// (which unsubscribes) when the component unmounts.
pub fn use_current_path() -> ReadSignal<String> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (path, set_path) = signal(ctx.router.with_value(Router::current));
    let subscription = ctx
        .router
        .with_value(|router| router.subscribe(move |navigation| set_path.set(navigation.path.clone())));
    let _subscription = StoredValue::new_local(subscription);

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_routes;

    fn subscriber_count(ctx: AppContext) -> usize {
        ctx.router.with_value(Router::subscriber_count)
    }

    #[test]
    fn test_router_handle_push_and_current() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppContext::new(&load_routes().unwrap()).unwrap());

            let router = use_router();
            assert_eq!(router.current(), "/");

            router.push("/about");
            assert_eq!(router.current(), "/about");

            // Empty targets are logged and ignored
            router.push("");
            assert_eq!(router.current(), "/about");
        });
    }

    #[test]
    fn test_current_path_subscription_released_on_unmount() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(&load_routes().unwrap()).unwrap();
            provide_context(ctx);
            assert_eq!(subscriber_count(ctx), 0);

            let view_owner = owner.child();
            let path = view_owner.with(use_current_path);
            assert_eq!(subscriber_count(ctx), 1);
            assert_eq!(path.get_untracked(), "/");

            use_router().push("/about");
            assert_eq!(path.get_untracked(), "/about");

            view_owner.cleanup();
            assert_eq!(subscriber_count(ctx), 0);

            // Later navigations still work without the unmounted view
            use_router().push("/");
            assert_eq!(use_router().current(), "/");
        });
    }

    #[test]
    fn test_activate_runs_button_behavior() {
        use pagenav_core::{Inert, Navigate};

        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppContext::new(&load_routes().unwrap()).unwrap());
            let router = use_router();

            router.activate(&Inert);
            assert_eq!(router.current(), "/");

            router.activate(&Navigate::to("/about"));
            assert_eq!(router.current(), "/about");
        });
    }
}
