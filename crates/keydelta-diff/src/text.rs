// SPDX-License-Identifier: MIT OR Apache-2.0
//! Delta over serialized JSON documents.

use crate::compute::compute_delta;
use keydelta_core::{Argument, DeltaError, Result};
use serde_json::{Map, Value};

/// Parse two JSON documents and compute their delta.
///
/// Parsed documents never share allocations, so every array or object
/// valued key of `updated` is reported.
///
/// # Errors
///
/// Returns [`DeltaError::Parse`] when a document is not valid JSON
/// (`original` is parsed first), and [`DeltaError::InvalidArgument`] when a
/// parsed document is not object-like.
pub fn compute_delta_str(original: &str, updated: &str) -> Result<Map<String, Value>> {
    let original = parse(serde_json::from_str(original), Argument::Original)?;
    let updated = parse(serde_json::from_str(updated), Argument::Updated)?;
    compute_delta(&original, &updated)
}

/// Byte-slice variant of [`compute_delta_str`].
///
/// # Errors
///
/// Same conditions as [`compute_delta_str`]; invalid UTF-8 is a parse error.
pub fn compute_delta_slice(original: &[u8], updated: &[u8]) -> Result<Map<String, Value>> {
    let original = parse(serde_json::from_slice(original), Argument::Original)?;
    let updated = parse(serde_json::from_slice(updated), Argument::Updated)?;
    compute_delta(&original, &updated)
}

fn parse(parsed: serde_json::Result<Value>, argument: Argument) -> Result<Value> {
    parsed.map_err(|source| DeltaError::Parse { argument, source })
}
