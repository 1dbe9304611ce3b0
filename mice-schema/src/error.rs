//! Error types for descriptor adaptation.

use thiserror::Error;

/// Error type for building the IR of a single schema file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The file does not declare a `go_package` option.
    #[error("file {file} is missing go_package option")]
    MissingNamespaceOption {
        /// Schema file name as reported by protoc.
        file: String,
    },
}

impl ModelError {
    /// Creates a missing `go_package` option error.
    pub fn missing_option(file: impl Into<String>) -> Self {
        Self::MissingNamespaceOption { file: file.into() }
    }

    /// Returns the schema file the error refers to.
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::MissingNamespaceOption { file } => file,
        }
    }
}
