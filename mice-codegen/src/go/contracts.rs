//! Contract (interface) code generation.

use super::{caller_signature, handler_signature};
use crate::style::ContractStyle;
use mice_schema::ResolvedService;

/// Generator for service contracts.
pub struct ContractGenerator {
    style: ContractStyle,
}

impl ContractGenerator {
    /// Creates a new contract generator.
    #[must_use]
    pub const fn new(style: ContractStyle) -> Self {
        Self { style }
    }

    /// Generates the contracts of a service.
    ///
    /// The unified style emits one interface. The split style emits the
    /// caller interface followed by the handler interface.
    #[must_use]
    pub fn generate(&self, svc: &ResolvedService) -> String {
        match self.style {
            ContractStyle::Unified => self.generate_caller(svc),
            ContractStyle::Split => {
                let mut output = self.generate_caller(svc);
                output.push('\n');
                output.push_str(&self.generate_handler(svc));
                output
            }
        }
    }

    /// Generates the caller interface.
    fn generate_caller(&self, svc: &ResolvedService) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "type {} interface {{\n",
            self.style.caller_contract(svc)
        ));
        for method in &svc.methods {
            output.push_str(&format!("\t{}\n", caller_signature(method)));
        }
        output.push_str("}\n");

        output
    }

    /// Generates the handler interface.
    fn generate_handler(&self, svc: &ResolvedService) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "type {} interface {{\n",
            self.style.handler_contract(svc)
        ));
        for method in &svc.methods {
            output.push_str(&format!("\t{}\n", handler_signature(method)));
        }
        output.push_str("}\n");

        output
    }
}
