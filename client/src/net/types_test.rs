use super::*;

fn sample_request() -> AssessmentRequest {
    AssessmentRequest {
        age: 58.0,
        gender: "Male".to_owned(),
        smoking: "Former".to_owned(),
        alcohol: "Moderate".to_owned(),
        ecg: "Abnormal".to_owned(),
        spo2: 94.5,
        blood_pressure: "138/92".to_owned(),
    }
}

#[test]
fn assessment_request_round_trips() {
    let request = sample_request();
    let json = serde_json::to_string(&request).unwrap();
    let back: AssessmentRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn assessment_request_field_names_are_stable() {
    let value = serde_json::to_value(sample_request()).unwrap();
    let object = value.as_object().unwrap();
    for key in ["age", "gender", "smoking", "alcohol", "ecg", "spo2", "blood_pressure"] {
        assert!(object.contains_key(key), "missing field {key:?}");
    }
    assert_eq!(object.len(), 7);
}

#[test]
fn risk_response_round_trips() {
    let response = RiskResponse { risk: "High Risk".to_owned(), probability: 73.21 };
    let json = serde_json::to_string(&response).unwrap();
    let back: RiskResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response);
}

#[test]
fn risk_response_parses_server_payload() {
    let back: RiskResponse =
        serde_json::from_str(r#"{"risk":"Low Risk","probability":12.5}"#).unwrap();
    assert_eq!(back.risk, "Low Risk");
    assert!((back.probability - 12.5).abs() < f64::EPSILON);
}
