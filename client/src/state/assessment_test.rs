use super::*;

fn filled_fields() -> AssessmentFields {
    AssessmentFields {
        age: "58".to_owned(),
        gender: "Male".to_owned(),
        smoking: "Former".to_owned(),
        alcohol: "Moderate".to_owned(),
        ecg: "Abnormal".to_owned(),
        spo2: "94.5".to_owned(),
        blood_pressure: " 138/92 ".to_owned(),
    }
}

// =============================================================
// to_request
// =============================================================

#[test]
fn valid_fields_build_a_request() {
    let request = filled_fields().to_request().unwrap();
    assert!((request.age - 58.0).abs() < f64::EPSILON);
    assert_eq!(request.gender, "Male");
    assert_eq!(request.smoking, "Former");
    assert_eq!(request.alcohol, "Moderate");
    assert_eq!(request.ecg, "Abnormal");
    assert!((request.spo2 - 94.5).abs() < f64::EPSILON);
    assert_eq!(request.blood_pressure, "138/92");
}

#[test]
fn age_is_trimmed_before_parsing() {
    let mut fields = filled_fields();
    fields.age = " 61 ".to_owned();
    assert!((fields.to_request().unwrap().age - 61.0).abs() < f64::EPSILON);
}

#[test]
fn missing_age_is_rejected() {
    let mut fields = filled_fields();
    fields.age = String::new();
    assert!(fields.to_request().is_err());
}

#[test]
fn out_of_range_age_is_rejected() {
    for bad in ["0", "121", "-5"] {
        let mut fields = filled_fields();
        fields.age = bad.to_owned();
        assert!(fields.to_request().is_err(), "expected rejection for age {bad:?}");
    }
}

#[test]
fn out_of_range_spo2_is_rejected() {
    for bad in ["", "49.9", "101"] {
        let mut fields = filled_fields();
        fields.spo2 = bad.to_owned();
        assert!(fields.to_request().is_err(), "expected rejection for spo2 {bad:?}");
    }
}

#[test]
fn malformed_blood_pressure_is_not_a_client_error() {
    // The server falls back to 120/80; the client passes the text through.
    let mut fields = filled_fields();
    fields.blood_pressure = "not a reading".to_owned();
    assert_eq!(fields.to_request().unwrap().blood_pressure, "not a reading");
}

// =============================================================
// Defaults and phases
// =============================================================

#[test]
fn default_fields_use_first_encoder_classes_alphabetically() {
    let fields = AssessmentFields::default();
    assert_eq!(fields.gender, "Female");
    assert_eq!(fields.smoking, "Never");
    assert_eq!(fields.alcohol, "None");
    assert_eq!(fields.ecg, "Normal");
    assert!(fields.age.is_empty());
}

#[test]
fn submit_phase_defaults_to_idle() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
}

#[test]
fn only_done_counts_as_done() {
    use crate::net::types::RiskResponse;

    assert!(!SubmitPhase::Idle.is_done());
    assert!(!SubmitPhase::Submitting.is_done());
    assert!(!SubmitPhase::Failed("boom".to_owned()).is_done());
    let done = SubmitPhase::Done(RiskResponse { risk: "Low Risk".to_owned(), probability: 8.1 });
    assert!(done.is_done());
}
