//! Risk scoring pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the offline training pipeline at serving time: assemble the
//! feature vector in artifact order, label-encode categoricals, apply the
//! standard scaler, score with the logistic weights, and classify against
//! the decision threshold.
//!
//! ERROR HANDLING
//! ==============
//! User input never fails scoring. Malformed blood pressure falls back to
//! 120/80 and unknown categorical values encode as the first trained class;
//! only an artifact/request schema mismatch is an error.

#[cfg(test)]
#[path = "risk_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::RiskModel;

/// Default blood pressure when the submitted text cannot be parsed.
const BP_FALLBACK: (f64, f64) = (120.0, 80.0);

pub const HIGH_RISK: &str = "High Risk";
pub const LOW_RISK: &str = "Low Risk";

/// Assessment form payload for `POST /api/predict`.
///
/// Mirrors the client's wire type; the two crates keep their own copies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub age: f64,
    pub gender: String,
    pub smoking: String,
    pub alcohol: String,
    pub ecg: String,
    pub spo2: f64,
    pub blood_pressure: String,
}

/// Risk classification returned to the client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiskResponse {
    /// `"High Risk"` or `"Low Risk"`.
    pub risk: String,
    /// Probability as a percentage, rounded to two decimals.
    pub probability: f64,
}

/// Scoring failures, surfaced as internal errors by the route layer.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("artifact names a feature the request cannot supply: {0:?}")]
    UnknownFeature(String),
}

/// Parse `"systolic/diastolic"` text, falling back to 120/80.
#[must_use]
pub fn parse_blood_pressure(raw: &str) -> (f64, f64) {
    let mut parts = raw.trim().splitn(2, '/');
    match (parts.next(), parts.next()) {
        (Some(sys), Some(dia)) => match (sys.trim().parse(), dia.trim().parse()) {
            (Ok(s), Ok(d)) => (s, d),
            _ => BP_FALLBACK,
        },
        _ => BP_FALLBACK,
    }
}

/// Score an assessment against the model.
///
/// # Errors
///
/// Returns an error only when the artifact names a feature this request
/// schema cannot supply.
pub fn score(model: &RiskModel, request: &AssessmentRequest) -> Result<RiskResponse, RiskError> {
    let (systolic, diastolic) = parse_blood_pressure(&request.blood_pressure);

    let mut z = model.intercept;
    for (i, feature) in model.features.iter().enumerate() {
        let raw = feature_value(model, feature, request, systolic, diastolic)?;
        let scaled = (raw - model.scaler.mean[i]) / model.scaler.scale[i];
        z += model.coefficients[i] * scaled;
    }
    let proba = sigmoid(z);

    let risk = if proba >= model.threshold { HIGH_RISK } else { LOW_RISK };
    Ok(RiskResponse {
        risk: risk.to_owned(),
        probability: (proba * 10_000.0).round() / 100.0,
    })
}

fn feature_value(
    model: &RiskModel,
    feature: &str,
    request: &AssessmentRequest,
    systolic: f64,
    diastolic: f64,
) -> Result<f64, RiskError> {
    match feature {
        "Age" => Ok(request.age),
        "Blood Oxygen Levels (SpO2%)" => Ok(request.spo2),
        "BP_Systolic" => Ok(systolic),
        "BP_Diastolic" => Ok(diastolic),
        "Gender" => Ok(encode(model, feature, &request.gender)),
        "Smoking Status" => Ok(encode(model, feature, &request.smoking)),
        "Alcohol Consumption" => Ok(encode(model, feature, &request.alcohol)),
        "ECG Results" => Ok(encode(model, feature, &request.ecg)),
        other => Err(RiskError::UnknownFeature(other.to_owned())),
    }
}

/// Label-encode a categorical value. Unknown categories map to the first
/// trained class, matching the training pipeline's fallback.
fn encode(model: &RiskModel, feature: &str, value: &str) -> f64 {
    model.encoders.get(feature).map_or(0.0, |classes| {
        classes.iter().position(|c| c.as_str() == value).unwrap_or(0) as f64
    })
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
