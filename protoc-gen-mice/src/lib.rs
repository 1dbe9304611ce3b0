//! # protoc-gen-mice
//!
//! protoc plugin that turns service declarations into Go clients and
//! handler registration for the mice RPC runtime.
//!
//! This crate provides:
//! - The batch assembler that processes every schema file of a request
//! - Decoding and encoding of the protoc plugin envelope
//! - Option resolution from flags, environment and the protoc parameter
//!
//! ## Crate Organization
//!
//! - [`schema`] - Descriptor adaptation and service IR
//! - [`codegen`] - Go source generation

pub mod batch;
pub mod config;
pub mod error;
pub mod plugin;

/// Descriptor adaptation and service IR.
pub mod schema {
    pub use mice_schema::*;
}

/// Go source generation.
pub mod codegen {
    pub use mice_codegen::*;
}

pub use batch::{BatchAssembler, BatchResult, FileOutcome, assemble};
pub use config::{Cli, GeneratorOptions, Overrides};
pub use error::PluginError;
pub use plugin::{build_response, decode_request, encode_response, read_input, run};
