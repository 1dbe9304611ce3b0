//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Unrecognised contract style name.
    #[error("unknown contract style '{value}' (expected 'unified' or 'split')")]
    UnknownStyle {
        /// Rejected value.
        value: String,
    },
}

impl CodegenError {
    /// Creates an unknown style error for the given value.
    pub fn unknown_style(value: impl Into<String>) -> Self {
        Self::UnknownStyle {
            value: value.into(),
        }
    }
}
