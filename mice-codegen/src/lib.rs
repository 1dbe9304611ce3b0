//! # Mice Codegen
//!
//! Go code generation for mice RPC services.
//!
//! This crate provides:
//! - Caller and handler contract generation
//! - Client stub generation over the mice network client
//! - Handler registration against the mice serving runtime
//! - Selectable contract styles (unified or split)

pub mod error;
pub mod generator;
pub mod go;
pub mod style;

pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator};
pub use style::ContractStyle;

use mice_schema::SchemaFile;

/// Suffix appended to a schema file's stem to name its output unit.
pub const OUTPUT_FILE_EXTENSION: &str = ".pb.mice.go";

/// Generates the Go output unit for a schema file.
///
/// # Arguments
/// * `file` - Resolved schema file
/// * `style` - Contract style to render
///
/// # Returns
/// The output file name and its Go source.
#[must_use]
pub fn generate_file(file: &SchemaFile, style: ContractStyle) -> GeneratedFile {
    GeneratedFile {
        name: output_name(file),
        content: Generator::new(file, style).generate(),
    }
}

/// Returns the output unit name for a schema file.
#[must_use]
pub fn output_name(file: &SchemaFile) -> String {
    format!("{}{}", file.stem, OUTPUT_FILE_EXTENSION)
}
