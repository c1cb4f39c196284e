//! Theme attribute read/apply/toggle on the document root.
//!
//! The `data-theme` attribute on `<html>` selects between the light and dark
//! palettes in CSS. The attribute is the single source of truth: toggle
//! reads it at click time and writes the flipped value back, so it stays
//! correct even if another script changed the attribute since the last
//! render. Requires a browser environment; SSR paths are no-ops.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

const THEME_ATTR: &str = "data-theme";

/// Read the current theme from the document root attribute.
///
/// An absent attribute (or a value other than `"dark"`) reads as light.
#[must_use]
pub fn current() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute(THEME_ATTR));
        Theme::from_attr(attr.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Write the theme to the document root attribute.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute(THEME_ATTR, theme.attr_value());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme: read the attribute, write the flipped value back.
///
/// Returns the theme now in effect.
pub fn toggle() -> Theme {
    let next = current().flipped();
    apply(next);
    next
}
