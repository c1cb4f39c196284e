//! Wire DTOs for the client/server JSON API.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's request/response payloads
//! so serde round-trips stay lossless; the server keeps its own copies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Assessment form payload for `POST /api/predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Age in years.
    pub age: f64,
    /// Self-reported gender, matching the trained encoder classes.
    pub gender: String,
    /// Smoking status (`"Never"`, `"Former"`, `"Current"`).
    pub smoking: String,
    /// Alcohol consumption (`"None"`, `"Moderate"`, `"Heavy"`).
    pub alcohol: String,
    /// ECG result (`"Normal"`, `"Abnormal"`).
    pub ecg: String,
    /// Blood oxygen saturation percentage.
    pub spo2: f64,
    /// Blood pressure as `"systolic/diastolic"` text.
    pub blood_pressure: String,
}

/// Risk classification returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    /// `"High Risk"` or `"Low Risk"`.
    pub risk: String,
    /// Probability as a percentage, rounded to two decimals.
    pub probability: f64,
}
