//! Button bound to an [`Activate`] behavior.

use leptos::prelude::*;
use pagenav_core::Activate;

use crate::hooks::use_router;

stylance::import_crate_style!(css, "src/components/button/button.module.css");

/// A button whose click runs `action` against the application router.
///
/// ```ignore
/// <ActionButton label="Go to About" action=Navigate::to("/about") />
/// <ActionButton label="About Page" action=Inert />
/// ```
#[component]
pub fn ActionButton<A>(label: &'static str, action: A) -> impl IntoView
where
    A: Activate + Copy + Send + Sync + 'static,
{
    let router = use_router();
    let on_click = move |_: leptos::ev::MouseEvent| router.activate(&action);

    view! {
        <button class=css::button on:click=on_click>
            {label}
        </button>
    }
}
