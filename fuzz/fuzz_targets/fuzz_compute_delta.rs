#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for compute_delta
//!
//! Tests:
//! - No panics on arbitrary document pairs
//! - Delta keys are a subset of the updated keys
//! - Self-delta is empty

use keydelta_diff::{DeltaError, compute_delta, compute_delta_slice};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fn is_mapping(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

fuzz_target!(|data: &[u8]| {
    // Skip overly large or small inputs
    if data.len() > 50_000 || data.len() < 2 {
        return;
    }

    let (part_a, part_b) = data.split_at(data.len() / 2);

    // === Test: arbitrary bytes never panic ===
    let _ = compute_delta_slice(part_a, part_b);

    let Ok(original) = serde_json::from_slice::<Value>(part_a) else {
        return;
    };
    let Ok(updated) = serde_json::from_slice::<Value>(part_b) else {
        return;
    };

    match compute_delta(&original, &updated) {
        Ok(delta) => {
            // === Verify: delta keys come from updated ===
            let updated_keys: Vec<String> = match &updated {
                Value::Object(map) => map.keys().cloned().collect(),
                Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
                _ => unreachable!("non-mapping accepted"),
            };
            for key in delta.keys() {
                assert!(
                    updated_keys.contains(key),
                    "delta key {key} missing from updated"
                );
            }

            // === Verify: self-delta is empty ===
            assert!(compute_delta(&original, &original).unwrap().is_empty());
        }
        Err(DeltaError::InvalidArgument { .. }) => {
            assert!(!is_mapping(&original) || !is_mapping(&updated));
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
});
