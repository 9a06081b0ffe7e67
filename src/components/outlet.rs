//! Route outlet.
//!
//! Renders the page registered for the current path. Paths without a route
//! still navigate; they render [`NotFoundPage`] instead.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::hooks::use_current_path;
use crate::models::Page;
use crate::pages::{AboutPage, NotFoundPage, RootPage};
use crate::utils::log;

/// Renders the page for the current path.
#[component]
pub fn RouterOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let path = use_current_path();

    // Re-resolve only when the path changes; same-page pushes keep the view
    let page = Memo::new(move |_| path.with(|p| ctx.resolve(p)));

    move || match page.get() {
        Ok(Page::Root) => view! { <RootPage /> }.into_any(),
        Ok(Page::About) => view! { <AboutPage /> }.into_any(),
        Err(err) => {
            log::warn(&err.to_string());
            view! { <NotFoundPage path=path.get_untracked() /> }.into_any()
        }
    }
}
