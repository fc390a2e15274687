// SPDX-License-Identifier: MIT OR Apache-2.0
//! Counts of additions and modifications in a delta.

use keydelta_core::{Argument, Result, as_mapping};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// How a delta splits into added and modified keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSummary {
    /// Keys absent from the original mapping
    pub added: usize,
    /// Keys present in the original mapping with a different value
    pub modified: usize,
}

impl DeltaSummary {
    /// Classify the keys of `delta` against `original`.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::InvalidArgument`](keydelta_core::DeltaError::InvalidArgument)
    /// when `original` is not object-like.
    pub fn classify(original: &Value, delta: &Map<String, Value>) -> Result<Self> {
        let original = as_mapping(original, Argument::Original)?;
        let added = delta
            .keys()
            .filter(|key| !original.contains_key(key))
            .count();
        Ok(Self {
            added,
            modified: delta.len() - added,
        })
    }

    /// Total number of reported keys
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.modified
    }

    /// True when nothing was added or modified
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for DeltaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "added={} modified={}", self.added, self.modified)
    }
}
