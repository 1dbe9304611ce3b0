//! Intermediate representation for code generation.
//!
//! This module flattens a protobuf `FileDescriptorProto` into the handful of
//! resolved names the Go generator needs. Type references are already
//! rewritten relative to the file's package, and declaration order of
//! services and methods is preserved.

use crate::error::ModelError;
use crate::naming::{package_identifier, qualify_type, short_name, strip_extension};
use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

/// Intermediate representation of one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Schema file name as reported by protoc (e.g. `api/greeter.proto`).
    pub source_name: String,
    /// Protobuf package (dot-separated namespace).
    pub package: String,
    /// Go package identifier taken from the `go_package` option.
    pub go_package: String,
    /// File name without its extension.
    pub stem: String,
    /// Stem with the configured file prefix trimmed.
    pub short_name: String,
    /// Services in declaration order.
    pub services: Vec<ResolvedService>,
}

impl SchemaFile {
    /// Builds the IR for a file descriptor.
    ///
    /// # Arguments
    /// * `desc` - File descriptor from the code generator request
    /// * `file_prefix` - Prefix trimmed from the file stem when deriving
    ///   service addresses (empty for none)
    ///
    /// # Errors
    /// Returns `ModelError::MissingNamespaceOption` if the file has no
    /// `go_package` option.
    pub fn from_descriptor(
        desc: &FileDescriptorProto,
        file_prefix: &str,
    ) -> Result<Self, ModelError> {
        let source_name = desc.name();
        let go_package = desc
            .options
            .as_ref()
            .and_then(|opts| opts.go_package.as_deref())
            .ok_or_else(|| ModelError::missing_option(source_name))?;

        let package = desc.package().to_string();
        let short_name = short_name(source_name, file_prefix).to_string();

        let services = desc
            .service
            .iter()
            .map(|svc| ResolvedService::from_descriptor(svc, &package, &short_name))
            .collect();

        Ok(Self {
            source_name: source_name.to_string(),
            go_package: package_identifier(go_package).to_string(),
            stem: strip_extension(source_name).to_string(),
            short_name,
            package,
            services,
        })
    }

    /// Returns true if the file declares at least one service.
    #[must_use]
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// Returns the total number of methods across all services.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.services.iter().map(|svc| svc.methods.len()).sum()
    }
}

/// Resolved service information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedService {
    /// Service name, used verbatim as the Go type name.
    pub name: String,
    /// Default routing address (the owning file's short name).
    pub address: String,
    /// Methods in declaration order.
    pub methods: Vec<ResolvedMethod>,
}

impl ResolvedService {
    /// Creates a resolved service from a service descriptor.
    #[must_use]
    pub fn from_descriptor(desc: &ServiceDescriptorProto, package: &str, address: &str) -> Self {
        Self {
            name: desc.name().to_string(),
            address: address.to_string(),
            methods: desc
                .method
                .iter()
                .map(|m| ResolvedMethod::from_descriptor(m, package))
                .collect(),
        }
    }

    /// Returns the caller contract name used by the split style.
    #[must_use]
    pub fn client_name(&self) -> String {
        format!("{}Client", self.name)
    }

    /// Returns the handler contract name used by the split style.
    #[must_use]
    pub fn handler_name(&self) -> String {
        format!("{}Handler", self.name)
    }

    /// Returns the method names in declaration order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }
}

/// Resolved method information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMethod {
    /// Method name, also the routing key on the wire.
    pub name: String,
    /// Request type, relative to the owning package.
    pub input_type: String,
    /// Response type, relative to the owning package.
    pub output_type: String,
}

impl ResolvedMethod {
    /// Creates a resolved method from a method descriptor.
    #[must_use]
    pub fn from_descriptor(desc: &MethodDescriptorProto, package: &str) -> Self {
        Self {
            name: desc.name().to_string(),
            input_type: qualify_type(desc.input_type(), package).to_string(),
            output_type: qualify_type(desc.output_type(), package).to_string(),
        }
    }
}
