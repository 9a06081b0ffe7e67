use leptos::prelude::*;
use pagenav_core::{Inert, Navigate};

use super::css;
use crate::components::ActionButton;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <div class=css::buttons>
                <ActionButton label="Go to Root" action=Navigate::to("/") />
                <ActionButton label="About Page" action=Inert />
            </div>
        </section>
    }
}
