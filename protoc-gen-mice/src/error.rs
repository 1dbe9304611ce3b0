//! Error types for plugin operations.

use thiserror::Error;

/// Process-level error of the plugin.
///
/// Per-file problems never surface here; they are reported inside the
/// response envelope instead.
#[derive(Debug, Error)]
pub enum PluginError {
    /// IO error while reading the request.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The request envelope could not be decoded.
    #[error("decode input: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The response envelope could not be encoded.
    #[error("encode output: {0}")]
    Encode(#[from] prost::EncodeError),

    /// Malformed protoc plugin parameter.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Offending `key=value` pair.
        parameter: String,
        /// Error message.
        message: String,
    },
}

impl PluginError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}
