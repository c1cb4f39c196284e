//! Landing page.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <main class="page page--home">
            <h1>"Heart-attack risk, estimated in seconds"</h1>
            <p class="page__lede">
                "Answer seven questions about your vitals and lifestyle and get a "
                "risk estimate from a model trained on clinical survey data."
            </p>
            <a class="cta-button" href="/assess">"Start assessment"</a>
            <p class="page__disclaimer">
                "This tool is informational and is not a medical diagnosis."
            </p>
        </main>
    }
}
