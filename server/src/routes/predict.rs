//! Risk prediction route.

#[cfg(test)]
#[path = "predict_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::services::risk::{self, AssessmentRequest};
use crate::state::AppState;

/// `POST /api/predict` — score an assessment and classify risk.
///
/// 503 when no model artifact is loaded; 500 on an artifact/request schema
/// mismatch. User input itself never fails: malformed blood pressure falls
/// back and unknown categories encode as the first trained class.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Some(model) = state.model.as_ref() else {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "risk model not loaded".to_owned()));
    };

    match risk::score(model, &request) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!(error = %e, "scoring failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "scoring failed".to_owned()))
        }
    }
}
