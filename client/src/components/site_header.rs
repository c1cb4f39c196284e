//! Top navigation bar with the theme toggle.

use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"CardioCheck"</a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="/assess">"Assessment"</a>
                <ThemeToggle/>
            </nav>
        </header>
    }
}
