// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Shallow JSON Delta
//!
//! Compute the entries of an updated mapping that are new or changed with
//! respect to an original mapping.
//!
//! ## Semantics
//!
//! For every key of the updated mapping, in its own order:
//! - absent from the original: kept (an addition)
//! - present with a strictly equal value: dropped
//! - present with any other value: kept with the updated value
//!
//! Keys that only exist in the original are never reported, and values are
//! never compared recursively. Arrays and objects are equal only when they
//! are the same allocation, see [`StrictEq`].
//!
//! ```
//! use keydelta_diff::compute_delta;
//! use serde_json::json;
//!
//! let original = json!({"name": "John", "age": 30, "city": "New York"});
//! let updated = json!({"name": "John", "age": 35, "country": "USA"});
//!
//! let delta = compute_delta(&original, &updated)?;
//! assert_eq!(serde_json::Value::Object(delta), json!({"age": 35, "country": "USA"}));
//! # Ok::<(), keydelta_diff::DeltaError>(())
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

mod compute;
mod summary;
mod text;
mod typed;

pub use compute::compute_delta;
pub use summary::DeltaSummary;
pub use text::{compute_delta_slice, compute_delta_str};
pub use typed::compute_delta_by;

pub use keydelta_core::{Argument, DeltaError, Lookup, MappingRef, Result, StrictEq};
