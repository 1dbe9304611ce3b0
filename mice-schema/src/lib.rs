//! # Mice Schema
//!
//! Protobuf descriptor adapter for the mice code generator.
//!
//! This crate provides:
//! - Conversion of `FileDescriptorProto` trees into an immutable service IR
//! - Go package and type-reference resolution
//! - Output and routing name derivation
//! - Batch-level validation of derived service addresses

pub mod error;
pub mod ir;
pub mod naming;
pub mod validation;

pub use error::ModelError;
pub use ir::{ResolvedMethod, ResolvedService, SchemaFile};
pub use naming::{package_identifier, qualify_type, short_name, strip_extension};
pub use validation::{AddressCollision, ServiceAddressRegistry};
