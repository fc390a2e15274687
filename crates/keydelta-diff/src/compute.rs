// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shallow delta over dynamic JSON mappings.

use keydelta_core::{Argument, MappingRef, Result, as_mapping};
use serde_json::{Map, Value};

/// Compute the entries of `updated` that are new or changed relative to
/// `original`.
///
/// Both inputs must be object-like: a JSON object, or a JSON array whose
/// keys are its indices. `original` is validated first and both are
/// validated before any comparison. The result is a fresh map in the
/// enumeration order of `updated`; neither input is modified.
///
/// Values are compared with [`StrictEq`](keydelta_core::StrictEq), so
/// arrays and objects only match when both sides hold the same allocation.
/// Keys removed from `updated` are not reported. An array `original` also
/// owns a `"length"` key equal to its element count.
///
/// # Errors
///
/// Returns [`DeltaError::InvalidArgument`](keydelta_core::DeltaError::InvalidArgument)
/// when either input is `null` or a primitive. The error names the offending
/// argument.
pub fn compute_delta(original: &Value, updated: &Value) -> Result<Map<String, Value>> {
    let original = guard(original, Argument::Original)?;
    let updated = guard(updated, Argument::Updated)?;

    let delta: Map<String, Value> = updated
        .iter()
        .filter(|(key, value)| !original.holds(key, value))
        .map(|(key, value)| (key.into_owned(), value.clone()))
        .collect();

    tracing::debug!(
        original_len = original.len(),
        updated_len = updated.len(),
        delta_len = delta.len(),
        "computed shallow delta"
    );

    Ok(delta)
}

fn guard(value: &Value, argument: Argument) -> Result<MappingRef<'_>> {
    as_mapping(value, argument).inspect_err(|err| {
        tracing::debug!(argument = argument.as_str(), error = %err, "rejected delta input");
    })
}
