//! In-progress submission marker.
//!
//! Adds the `loading` class token to the submit control so styling rules can
//! show a busy indicator. `classList.add` is idempotent, so repeated clicks
//! leave the class set unchanged. Nothing here removes the marker: the
//! control leaves the DOM when the result view replaces the form.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Class token consumed by the busy-indicator styling rules.
pub const LOADING_CLASS: &str = "loading";

/// Add the loading marker to the element with the given id.
///
/// A missing element (or a non-browser environment) is a silent no-op.
pub fn mark(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let _ = el.class_list().add_1(LOADING_CLASS);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
