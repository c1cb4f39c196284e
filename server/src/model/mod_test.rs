use super::*;

fn artifact_json() -> serde_json::Value {
    serde_json::json!({
        "features": ["Age", "Gender", "Blood Oxygen Levels (SpO2%)"],
        "encoders": { "Gender": ["Female", "Male"] },
        "scaler": {
            "mean": [54.0, 0.5, 96.0],
            "scale": [12.0, 0.5, 2.0]
        },
        "coefficients": [0.8, 0.2, -0.5],
        "intercept": -1.1,
        "threshold": 0.42
    })
}

#[test]
fn valid_artifact_parses() {
    let model = RiskModel::from_json(&artifact_json().to_string()).unwrap();
    assert_eq!(model.features.len(), 3);
    assert_eq!(model.encoders["Gender"], vec!["Female", "Male"]);
    assert!((model.threshold - 0.42).abs() < f64::EPSILON);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = RiskModel::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}

#[test]
fn coefficient_length_mismatch_is_rejected() {
    let mut raw = artifact_json();
    raw["coefficients"] = serde_json::json!([0.8, 0.2]);
    let err = RiskModel::from_json(&raw.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Invalid(_)));
}

#[test]
fn scaler_length_mismatch_is_rejected() {
    let mut raw = artifact_json();
    raw["scaler"]["mean"] = serde_json::json!([54.0, 0.5]);
    let err = RiskModel::from_json(&raw.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Invalid(_)));
}

#[test]
fn zero_scale_entry_is_rejected() {
    let mut raw = artifact_json();
    raw["scaler"]["scale"] = serde_json::json!([12.0, 0.0, 2.0]);
    let err = RiskModel::from_json(&raw.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Invalid(_)));
}

#[test]
fn threshold_outside_unit_interval_is_rejected() {
    for bad in [0.0, 1.0, 1.5, -0.2] {
        let mut raw = artifact_json();
        raw["threshold"] = serde_json::json!(bad);
        let err = RiskModel::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)), "threshold {bad} accepted");
    }
}

#[test]
fn encoder_for_unknown_feature_is_rejected() {
    let mut raw = artifact_json();
    raw["encoders"]["Favorite Color"] = serde_json::json!(["Red", "Blue"]);
    let err = RiskModel::from_json(&raw.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Invalid(_)));
}

#[test]
fn empty_encoder_class_list_is_rejected() {
    let mut raw = artifact_json();
    raw["encoders"]["Gender"] = serde_json::json!([]);
    let err = RiskModel::from_json(&raw.to_string()).unwrap_err();
    assert!(matches!(err, ModelError::Invalid(_)));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = RiskModel::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ModelError::Read { .. }));
}

#[test]
fn bundled_artifact_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/risk_model.json");
    let model = RiskModel::from_path(&path).unwrap();
    assert_eq!(model.features.len(), 8);
    assert_eq!(model.encoders.len(), 4);
}
