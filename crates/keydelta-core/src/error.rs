// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for keydelta.

use std::fmt;

/// Result alias for keydelta operations
pub type Result<T> = std::result::Result<T, DeltaError>;

/// Which input of a delta computation an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The baseline mapping
    Original,
    /// The candidate mapping
    Updated,
}

impl Argument {
    /// Lowercase name used in messages and log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while computing a delta
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    /// An input was null or a primitive instead of a mapping
    #[error("invalid argument: {argument} mapping must be a non-null object (found {found})")]
    InvalidArgument {
        /// The offending input
        argument: Argument,
        /// Kind of value that was supplied
        found: &'static str,
    },

    /// An input document could not be parsed as JSON
    #[error("failed to parse {argument} mapping: {source}")]
    Parse {
        /// The offending input
        argument: Argument,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },
}

impl DeltaError {
    /// Build an [`DeltaError::InvalidArgument`]
    #[must_use]
    pub const fn invalid_argument(argument: Argument, found: &'static str) -> Self {
        Self::InvalidArgument { argument, found }
    }

    /// The input this error refers to
    #[must_use]
    pub const fn argument(&self) -> Argument {
        match self {
            Self::InvalidArgument { argument, .. } | Self::Parse { argument, .. } => *argument,
        }
    }

    /// True for validation failures
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
