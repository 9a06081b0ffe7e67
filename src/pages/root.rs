use leptos::prelude::*;
use pagenav_core::{Inert, Navigate};

use super::css;
use crate::components::ActionButton;

#[component]
pub fn RootPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <div class=css::buttons>
                <ActionButton label="Root Page" action=Inert />
                <ActionButton label="Go to About" action=Navigate::to("/about") />
            </div>
        </section>
    }
}
