//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! model is `None` when the artifact failed to load; the predict route turns
//! that into a service-unavailable response instead of the server refusing
//! to start.

use std::sync::Arc;

use crate::model::RiskModel;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the model is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Loaded risk model. `None` if the artifact was missing or invalid.
    pub model: Option<Arc<RiskModel>>,
}

impl AppState {
    #[must_use]
    pub fn new(model: Option<Arc<RiskModel>>) -> Self {
        Self { model }
    }
}
