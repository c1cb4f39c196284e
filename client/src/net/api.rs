//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since submission is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so request
//! failures degrade to an in-page message without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{AssessmentRequest, RiskResponse};

/// Submit an assessment to `POST /api/predict`.
///
/// # Errors
///
/// Returns a user-facing message if the request cannot be sent, the server
/// rejects it, or the response body cannot be decoded.
pub async fn submit_assessment(request: &AssessmentRequest) -> Result<RiskResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/predict")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(if detail.is_empty() {
                format!("prediction request failed: {}", resp.status())
            } else {
                detail
            });
        }
        resp.json::<RiskResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
