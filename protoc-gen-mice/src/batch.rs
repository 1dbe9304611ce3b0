//! Batch assembly.
//!
//! Every schema file of a request is processed in input order. A file either
//! emits one output unit, records a file-scoped error, or contributes nothing
//! because it declares no services. Errors never stop the batch.

use crate::config::GeneratorOptions;
use mice_codegen::{GeneratedFile, generate_file};
use mice_schema::{SchemaFile, ServiceAddressRegistry};
use prost_types::FileDescriptorProto;

/// Result of processing one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file produced an output unit.
    Emitted(GeneratedFile),
    /// The file could not be processed.
    Errored(String),
    /// The file declares no services.
    Empty,
}

/// Accumulated output of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Output units in input order.
    pub files: Vec<GeneratedFile>,
    /// The first file-scoped error of the batch.
    pub error: Option<String>,
}

impl BatchResult {
    /// Folds one file outcome into the result.
    ///
    /// Only the first error is kept; later errors are dropped.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Emitted(file) => self.files.push(file),
            FileOutcome::Errored(message) => {
                if let Some(first) = self.error.as_deref() {
                    tracing::debug!("Dropping error '{}', already reporting '{}'", message, first);
                } else {
                    self.error = Some(message);
                }
            }
            FileOutcome::Empty => {}
        }
    }

    /// Returns true if a file-scoped error was recorded.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Processes schema files one at a time into a [`BatchResult`].
pub struct BatchAssembler<'a> {
    options: &'a GeneratorOptions,
    addresses: ServiceAddressRegistry,
    result: BatchResult,
}

impl<'a> BatchAssembler<'a> {
    /// Creates an assembler with the given options.
    #[must_use]
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            addresses: ServiceAddressRegistry::new(),
            result: BatchResult::default(),
        }
    }

    /// Processes the next schema file.
    pub fn push(&mut self, desc: &FileDescriptorProto) {
        let outcome = self.process_file(desc);
        self.result.record(outcome);
    }

    /// Consumes the assembler and returns the accumulated result.
    #[must_use]
    pub fn finish(self) -> BatchResult {
        tracing::info!(
            "Generated {} file(s){}",
            self.result.files.len(),
            if self.result.has_error() { " with errors" } else { "" }
        );
        self.result
    }

    /// Builds the IR of a file and renders it.
    fn process_file(&mut self, desc: &FileDescriptorProto) -> FileOutcome {
        let file = match SchemaFile::from_descriptor(desc, &self.options.file_prefix) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!("{}", err);
                return FileOutcome::Errored(err.to_string());
            }
        };

        if !file.has_services() {
            tracing::debug!("Skipping {}: no services", file.source_name);
            return FileOutcome::Empty;
        }

        if let Some(collision) = self.addresses.register(&file) {
            tracing::warn!(
                "Service address '{}' of {} is already used by {}",
                collision.address,
                collision.second,
                collision.first
            );
        }

        let generated = generate_file(&file, self.options.style);
        tracing::debug!(
            "Generated {} ({} service(s), {} method(s))",
            generated.name,
            file.services.len(),
            file.method_count()
        );
        FileOutcome::Emitted(generated)
    }
}

/// Processes all schema files of a batch in input order.
///
/// # Arguments
/// * `files` - File descriptors from the code generator request
/// * `options` - Resolved generator options
///
/// # Returns
/// The output units and the first file-scoped error, if any.
#[must_use]
pub fn assemble(files: &[FileDescriptorProto], options: &GeneratorOptions) -> BatchResult {
    let mut assembler = BatchAssembler::new(options);
    for file in files {
        assembler.push(file);
    }
    assembler.finish()
}
