// SPDX-License-Identifier: MIT OR Apache-2.0
//! # keydelta-cli
//!
//! Command-line front end for keydelta: print the keys of a JSON document
//! that were added or changed relative to another document.
//!
//! ## Usage
//!
//! ```bash
//! # Pretty-printed delta
//! keydelta before.json after.json
//!
//! # Compact output, updated document from stdin
//! cat after.json | keydelta -c before.json -
//!
//! # Also report how many keys were added and modified (stderr)
//! keydelta --summary before.json after.json
//! ```
//!
//! Logging goes to stderr and is filtered by the `KEYDELTA_LOG` environment
//! variable (default `keydelta=warn`).
//!
//! ## Library Usage
//!
//! For programmatic access use [`keydelta-diff`](https://docs.rs/keydelta-diff)
//! directly; it is re-exported here as [`diff`].

#![warn(missing_docs)]

/// Re-export of keydelta-diff.
pub use keydelta_diff as diff;

/// Tracing subscriber setup for the binary
pub mod logging;
