//! Local UI chrome state (theme).
//!
//! DESIGN
//! ======
//! The visual theme is observable DOM state: a `data-theme` attribute on the
//! document root that styling rules select on. `Theme` carries the pure
//! parse/flip logic; `util::theme` owns the attribute read/write so this
//! module stays testable without a browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual theme selected by the document root's `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Default palette; also the reading for an absent or unrecognized attribute.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse an attribute value. Anything other than `"dark"` reads as light.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The literal written back to the `data-theme` attribute.
    #[must_use]
    pub fn attr_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI state shared via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}
