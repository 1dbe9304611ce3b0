//! Handler registration code generation.

use super::go_string;
use crate::style::ContractStyle;
use mice_schema::ResolvedService;

/// Generator for `Register<Svc>Handler` functions.
pub struct RegistrationGenerator {
    style: ContractStyle,
}

impl RegistrationGenerator {
    /// Creates a new registration generator.
    #[must_use]
    pub const fn new(style: ContractStyle) -> Self {
        Self { style }
    }

    /// Generates the registration function of a service.
    ///
    /// The handler is bound together with the method names, in declaration
    /// order, as the set of routable operations.
    #[must_use]
    pub fn generate(&self, svc: &ResolvedService) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "func Register{}Handler(srv server.Server, handler {}) {{\n",
            svc.name,
            self.style.handler_contract(svc)
        ));

        output.push_str("\tsrv.AddHandler(handler");
        for name in svc.route_names() {
            output.push_str(", ");
            output.push_str(&go_string(name));
        }
        output.push_str(")\n");
        output.push_str("}\n");

        output
    }
}
