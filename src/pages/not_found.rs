use leptos::prelude::*;

use super::css;
use crate::hooks::use_router;

/// Shown when the current path has no registered page.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let router = use_router();
    let go_home = move |_: leptos::ev::MouseEvent| router.push("/");

    view! {
        <section class=css::page>
            <p class=css::missing>"No page at " <code>{path}</code></p>
            <button on:click=go_home>"Go to Root"</button>
        </section>
    }
}
