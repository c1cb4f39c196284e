//! Client application state shared via Leptos context.

pub mod assessment;
pub mod ui;
