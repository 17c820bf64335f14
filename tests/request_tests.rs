//! Request validation tests
//!
//! Untyped JSON requests must be rejected before any rule runs when the
//! category is not a string or a condition is not a strict boolean.

use fence_permission::error::InputError;
use fence_permission::report::EvaluationReport;
use fence_permission::request::EvaluationRequest;
use fence_permission::rules::{Condition, Outcome};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(json!({"category": "2U1"}), Outcome::Required)]
#[case(json!({"category": "2A3"}), Outcome::NotRequired)]
#[case(json!({"category": "2A1", "is_highway_adjacent": true}), Outcome::Required)]
#[case(json!({"category": "2A6"}), Outcome::NotRequired)]
#[case(json!({"category": "2B1"}), Outcome::UnknownCategory)]
#[case(json!({"category": "2A5", "height_up_to_1m": true}), Outcome::NotRequired)]
#[case(json!({"category": "2A5", "is_aonb": false, "affects_tpo": true}), Outcome::Required)]
fn test_valid_requests(#[case] request: Value, #[case] expected: Outcome) {
    let request = EvaluationRequest::from_value(&request).unwrap();
    assert_eq!(request.evaluate(), expected);
}

#[rstest]
#[case(json!({"category": 123}), "number")]
#[case(json!({"category": true}), "boolean")]
#[case(json!({"category": null}), "null")]
#[case(json!({"category": ["2U1"]}), "array")]
#[case(json!({"category": {"code": "2U1"}}), "object")]
#[case(json!({}), "missing")]
fn test_invalid_category_type(#[case] request: Value, #[case] expected_found: &str) {
    match EvaluationRequest::from_value(&request) {
        Err(InputError::InvalidCategoryType { found }) => assert_eq!(found, expected_found),
        other => panic!("expected InvalidCategoryType, got {other:?}"),
    }
}

#[rstest]
#[case(json!("yes"))]
#[case(json!("true"))]
#[case(json!(1))]
#[case(json!(0))]
#[case(json!(null))]
#[case(json!([true]))]
fn test_invalid_condition_type(#[case] flag: Value) {
    for category in ["2A1", "2U1", "2B1"] {
        let request = json!({"category": category, "is_highway_adjacent": flag});
        let err = EvaluationRequest::from_value(&request).unwrap_err();
        assert!(
            matches!(err, InputError::InvalidConditionType { ref condition, .. } if condition == "is_highway_adjacent"),
            "{category}: {err:?}"
        );
        assert!(err.is_type_error());
    }
}

#[test]
fn test_every_condition_name_accepted() {
    for condition in Condition::ALL {
        let request = json!({"category": "2A1", condition.as_str(): true});
        let parsed = EvaluationRequest::from_value(&request).unwrap();
        assert_eq!(parsed.conditions.active().collect::<Vec<_>>(), vec![condition]);
        assert_eq!(parsed.evaluate().is_required(), condition.is_qualifying());
    }
}

#[test]
fn test_unknown_condition_rejected() {
    let err = EvaluationRequest::from_json_str(r#"{"category": "2A1", "is_moat": true}"#)
        .unwrap_err();
    assert!(matches!(err, InputError::UnknownCondition(ref name) if name == "is_moat"));
    assert!(!err.is_type_error());
}

#[test]
fn test_report_from_json_request() {
    let request = EvaluationRequest::from_json_str(
        r#"{"category": "2A3", "faces_listed_building": true, "is_aonb": true}"#,
    )
    .unwrap();
    let report = EvaluationReport::new(request.category.clone(), request.explain());

    assert_eq!(report.outcome, Outcome::Required);
    assert_eq!(
        report.triggered_by,
        vec![Condition::FacesListedBuilding, Condition::Aonb]
    );
}
