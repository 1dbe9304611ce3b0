//! protoc plugin envelope handling.
//!
//! protoc writes a `CodeGeneratorRequest` to the plugin's stdin and expects a
//! `CodeGeneratorResponse` on stdout. Both are decoded and encoded with
//! `prost`; everything between them is the batch assembler.

use crate::batch::{BatchResult, assemble};
use crate::config::{GeneratorOptions, Overrides};
use crate::error::PluginError;
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse, code_generator_response};
use std::io::Read;
use std::path::Path;

/// Response feature flag advertising proto3 `optional` support.
pub const FEATURE_PROTO3_OPTIONAL: u64 = 1;

/// Reads the raw request from `path`, or from stdin when no path is given.
///
/// # Errors
/// Returns `PluginError::Io` if reading fails.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, PluginError> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut input = Vec::new();
            std::io::stdin().read_to_end(&mut input)?;
            Ok(input)
        }
    }
}

/// Decodes a code generator request.
///
/// # Errors
/// Returns `PluginError::Decode` if the bytes are not a valid request.
pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest, PluginError> {
    Ok(CodeGeneratorRequest::decode(bytes)?)
}

/// Builds the response envelope for a batch result.
#[must_use]
pub fn build_response(result: BatchResult) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: result.error,
        supported_features: Some(FEATURE_PROTO3_OPTIONAL),
        file: result
            .files
            .into_iter()
            .map(|file| code_generator_response::File {
                name: Some(file.name),
                content: Some(file.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Encodes a response envelope.
///
/// # Errors
/// Returns `PluginError::Encode` if encoding fails.
pub fn encode_response(response: &CodeGeneratorResponse) -> Result<Vec<u8>, PluginError> {
    let mut output = Vec::with_capacity(response.encoded_len());
    response.encode(&mut output)?;
    Ok(output)
}

/// Runs the plugin over a raw request.
///
/// # Arguments
/// * `input` - Encoded `CodeGeneratorRequest`
/// * `overrides` - Options set by flags or environment
///
/// # Returns
/// The encoded `CodeGeneratorResponse`.
///
/// # Errors
/// Returns `PluginError` if the request cannot be decoded, its parameter is
/// malformed, or the response cannot be encoded.
pub fn run(input: &[u8], overrides: &Overrides) -> Result<Vec<u8>, PluginError> {
    let request = decode_request(input)?;
    let options = GeneratorOptions::resolve(overrides, request.parameter.as_deref())?;
    tracing::debug!(
        "Processing {} file(s) with style '{}' and prefix '{}'",
        request.proto_file.len(),
        options.style,
        options.file_prefix
    );

    let result = assemble(&request.proto_file, &options);
    encode_response(&build_response(result))
}
