// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end scenarios through the public API.

use keydelta_diff::{
    Argument, DeltaError, DeltaSummary, compute_delta, compute_delta_by, compute_delta_str,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

#[test]
fn profile_update() {
    let original = json!({"name": "John", "age": 30, "city": "New York"});
    let updated = json!({"name": "John", "age": 35, "country": "USA"});

    let delta = compute_delta(&original, &updated).unwrap();
    assert_eq!(Value::Object(delta.clone()), json!({"age": 35, "country": "USA"}));

    let summary = DeltaSummary::classify(&original, &delta).unwrap();
    assert_eq!(summary.added, 1);
    assert_eq!(summary.modified, 1);
}

#[test]
fn addition_into_empty_mapping() {
    let delta = compute_delta(&json!({}), &json!({"a": 1})).unwrap();
    assert_eq!(Value::Object(delta), json!({"a": 1}));
}

#[test]
fn deletion_is_not_reflected() {
    let delta = compute_delta(&json!({"a": 1, "b": 2}), &json!({"a": 1})).unwrap();
    assert!(delta.is_empty());
}

#[test]
fn equal_arrays_in_distinct_documents_are_retained() {
    let delta = compute_delta(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})).unwrap();
    assert_eq!(Value::Object(delta), json!({"a": [1, 2]}));
}

#[test]
fn null_inputs_are_invalid_arguments() {
    let err = compute_delta(&Value::Null, &json!({})).unwrap_err();
    assert_eq!(err.argument(), Argument::Original);
    assert!(err.to_string().contains("original mapping must be a non-null object"));

    let err = compute_delta(&json!({}), &Value::Null).unwrap_err();
    assert_eq!(err.argument(), Argument::Updated);
    assert!(err.to_string().contains("updated mapping must be a non-null object"));
}

#[test]
fn number_original_is_invalid_argument() {
    let err = compute_delta(&json!(5), &json!({"a": 1})).unwrap_err();
    assert!(matches!(
        err,
        DeltaError::InvalidArgument {
            argument: Argument::Original,
            found: "number"
        }
    ));
}

#[test]
fn text_documents() {
    let delta = compute_delta_str(r#"{"a": 1, "b": 2}"#, r#"{"b": 3}"#).unwrap();
    assert_eq!(Value::Object(delta), json!({"b": 3}));
}

#[test]
fn typed_settings_update() {
    let original: HashMap<String, String> = [
        ("theme".to_string(), "dark".to_string()),
        ("lang".to_string(), "en".to_string()),
    ]
    .into_iter()
    .collect();
    let updated = [
        ("theme".to_string(), "light".to_string()),
        ("lang".to_string(), "en".to_string()),
        ("font".to_string(), "mono".to_string()),
    ];

    let delta: Vec<(String, String)> =
        compute_delta_by(&original, updated.iter().map(|(k, v)| (k, v)));
    assert_eq!(
        delta,
        [
            ("theme".to_string(), "light".to_string()),
            ("font".to_string(), "mono".to_string()),
        ]
    );
}

#[test]
fn concurrent_callers_share_inputs() {
    let original = Arc::new(json!({"a": 1, "b": 2}));
    let updated = Arc::new(json!({"a": 1, "b": 3, "c": 4}));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let original = Arc::clone(&original);
            let updated = Arc::clone(&updated);
            thread::spawn(move || compute_delta(&original, &updated).unwrap())
        })
        .collect();

    for handle in handles {
        let delta = handle.join().unwrap();
        assert_eq!(Value::Object(delta), json!({"b": 3, "c": 4}));
    }
}
