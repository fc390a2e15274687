// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and value semantics for keydelta
//!
//! This crate provides the foundational pieces used by the keydelta crates:
//!
//! - [`error`] - Error types and Result alias
//! - [`value`] - Strict (identity-aware) equality
//! - [`mapping`] - Mapping guard and key lookup

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Error types for keydelta operations
pub mod error;
/// Mapping views over JSON values and typed maps
pub mod mapping;
/// Strict equality semantics
pub mod value;

// Re-exports for convenience
pub use error::{Argument, DeltaError, Result};
pub use mapping::{ARRAY_LENGTH_KEY, Lookup, MappingRef, as_mapping};
pub use value::{StrictEq, value_kind};
