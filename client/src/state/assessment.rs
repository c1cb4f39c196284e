//! Assessment form state and input validation.
//!
//! DESIGN
//! ======
//! Form inputs are kept as raw strings until submit so partially typed
//! values never fight the controlled inputs. `to_request` validates the
//! numeric fields and produces the wire payload; the server owns the
//! blood-pressure parsing (malformed text falls back there, it is not a
//! client-side rejection).

#[cfg(test)]
#[path = "assessment_test.rs"]
mod assessment_test;

use crate::net::types::{AssessmentRequest, RiskResponse};

/// Raw assessment form fields, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentFields {
    pub age: String,
    pub gender: String,
    pub smoking: String,
    pub alcohol: String,
    pub ecg: String,
    pub spo2: String,
    pub blood_pressure: String,
}

impl Default for AssessmentFields {
    fn default() -> Self {
        Self {
            age: String::new(),
            gender: "Female".to_owned(),
            smoking: "Never".to_owned(),
            alcohol: "None".to_owned(),
            ecg: "Normal".to_owned(),
            spo2: String::new(),
            blood_pressure: String::new(),
        }
    }
}

impl AssessmentFields {
    /// Validate the numeric fields and build the wire request.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for a missing or out-of-range age or
    /// blood-oxygen value.
    pub fn to_request(&self) -> Result<AssessmentRequest, String> {
        let age: f64 = self
            .age
            .trim()
            .parse()
            .map_err(|_| "Enter your age in years.".to_owned())?;
        if !(1.0..=120.0).contains(&age) {
            return Err("Enter an age between 1 and 120.".to_owned());
        }

        let spo2: f64 = self
            .spo2
            .trim()
            .parse()
            .map_err(|_| "Enter your blood-oxygen level (SpO2 %).".to_owned())?;
        if !(50.0..=100.0).contains(&spo2) {
            return Err("Enter a blood-oxygen percentage between 50 and 100.".to_owned());
        }

        Ok(AssessmentRequest {
            age,
            gender: self.gender.clone(),
            smoking: self.smoking.clone(),
            alcohol: self.alcohol.clone(),
            ecg: self.ecg.clone(),
            spo2,
            blood_pressure: self.blood_pressure.trim().to_owned(),
        })
    }
}

/// Submission lifecycle for the assessment form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done(RiskResponse),
    Failed(String),
}

impl SubmitPhase {
    /// True once a result has come back and the result view should show.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}
