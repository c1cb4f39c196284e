//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::state::ui::{Theme, UiState};
use crate::util::theme;

/// A toggle button that switches between the light and dark palettes.
///
/// The click handler reads the document root attribute at click time and
/// writes the flipped value back; the context signal only drives the icon.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let now = theme::toggle();
        ui.update(|u| u.theme = now);
    };

    let icon = move || match ui.get().theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263e}",
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle title="Toggle theme">
            {icon}
        </button>
    }
}
