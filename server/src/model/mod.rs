//! Risk model artifact: loading and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scoring model is trained offline; this module loads the exported
//! artifact (feature schema, encoders, scaler, logistic coefficients,
//! decision threshold) and validates internal consistency at startup so
//! the scoring path can index the arrays without further checks.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Artifact loading and validation failures.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact invalid: {0}")]
    Invalid(String),
}

/// Exported risk model: feature schema, preprocessing, and weights.
///
/// Mirrors the training pipeline's export: ordered features, label-encoder
/// classes for the categorical features, per-feature standard-scaler
/// statistics, logistic coefficients, and the decision threshold.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskModel {
    /// Feature names in scoring order.
    pub features: Vec<String>,
    /// Ordered encoder classes per categorical feature.
    pub encoders: HashMap<String, Vec<String>>,
    /// Standard-scaler statistics, index-aligned with `features`.
    pub scaler: Scaler,
    /// Logistic coefficients, index-aligned with `features`.
    pub coefficients: Vec<f64>,
    /// Logistic intercept.
    pub intercept: f64,
    /// Decision threshold: probability at or above it classifies High Risk.
    pub threshold: f64,
}

/// Standard-scaler statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl RiskModel {
    /// Load and validate an artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, parsed, or fails
    /// consistency validation.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate an artifact from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or internally
    /// inconsistent.
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let parsed: Self = serde_json::from_str(raw)?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let n = self.features.len();
        if n == 0 {
            return Err(ModelError::Invalid("no features".to_owned()));
        }
        if self.coefficients.len() != n {
            return Err(ModelError::Invalid(format!(
                "{} coefficients for {n} features",
                self.coefficients.len()
            )));
        }
        if self.scaler.mean.len() != n || self.scaler.scale.len() != n {
            return Err(ModelError::Invalid(format!(
                "scaler arrays ({}, {}) do not match {n} features",
                self.scaler.mean.len(),
                self.scaler.scale.len()
            )));
        }
        if self.scaler.scale.iter().any(|s| *s == 0.0) {
            return Err(ModelError::Invalid("zero scale entry".to_owned()));
        }
        if self.threshold <= 0.0 || self.threshold >= 1.0 {
            return Err(ModelError::Invalid(format!(
                "threshold {} outside (0, 1)",
                self.threshold
            )));
        }
        for (feature, classes) in &self.encoders {
            if !self.features.contains(feature) {
                return Err(ModelError::Invalid(format!(
                    "encoder for unknown feature {feature:?}"
                )));
            }
            if classes.is_empty() {
                return Err(ModelError::Invalid(format!(
                    "empty class list for feature {feature:?}"
                )));
            }
        }
        Ok(())
    }
}
