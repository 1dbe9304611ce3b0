//! Client stub code generation.
//!
//! The stub is a private struct holding the mice network client and the
//! routing address. Each method performs exactly one `Call` keyed by the
//! method name; errors from the client are returned as-is.

use super::{caller_signature, go_string};
use crate::style::ContractStyle;
use mice_schema::{ResolvedMethod, ResolvedService};

/// Generator for client stubs and their constructors.
pub struct StubGenerator {
    style: ContractStyle,
}

impl StubGenerator {
    /// Creates a new stub generator.
    #[must_use]
    pub const fn new(style: ContractStyle) -> Self {
        Self { style }
    }

    /// Generates the stub struct, its methods and the constructors.
    #[must_use]
    pub fn generate(&self, svc: &ResolvedService) -> String {
        let mut output = String::new();
        let stub_name = self.style.stub_name(svc);

        output.push_str(&format!("type {} struct {{\n", stub_name));
        output.push_str("\tc client.Client\n");
        output.push_str("\ts string\n");
        output.push_str("}\n\n");

        for method in &svc.methods {
            output.push_str(&self.generate_method(&stub_name, method));
        }

        output.push_str(&self.generate_constructors(svc));

        output
    }

    /// Generates one stub method.
    fn generate_method(&self, stub_name: &str, method: &ResolvedMethod) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "func (c *{}) {} {{\n",
            stub_name,
            caller_signature(method)
        ));
        output.push_str(&format!("\tresp := new({})\n", method.output_type));
        output.push_str(&format!(
            "\tif err := c.c.Call(c.s, {}, req, resp); err != nil {{\n",
            go_string(&method.name)
        ));
        output.push_str("\t\treturn nil, err\n");
        output.push_str("\t}\n");
        output.push_str("\treturn resp, nil\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates the constructors.
    ///
    /// Both styles get `New<Svc>Client` defaulting to the service address.
    /// The split style adds `New<Svc>ClientWithAddress` and routes the
    /// default constructor through it.
    fn generate_constructors(&self, svc: &ResolvedService) -> String {
        let mut output = String::new();
        let contract = self.style.caller_contract(svc);
        let stub_name = self.style.stub_name(svc);
        let address = go_string(&svc.address);

        output.push_str(&format!(
            "func New{}Client(cl client.Client) {} {{\n",
            svc.name, contract
        ));

        match self.style {
            ContractStyle::Unified => {
                output.push_str(&format!("\treturn &{}{{\n", stub_name));
                output.push_str("\t\tc: cl,\n");
                output.push_str(&format!("\t\ts: {},\n", address));
                output.push_str("\t}\n");
                output.push_str("}\n\n");
            }
            ContractStyle::Split => {
                output.push_str(&format!(
                    "\treturn New{}ClientWithAddress({}, cl)\n",
                    svc.name, address
                ));
                output.push_str("}\n\n");

                output.push_str(&format!(
                    "func New{}ClientWithAddress(svc string, cl client.Client) {} {{\n",
                    svc.name, contract
                ));
                output.push_str(&format!("\treturn &{}{{\n", stub_name));
                output.push_str("\t\tc: cl,\n");
                output.push_str("\t\ts: svc,\n");
                output.push_str("\t}\n");
                output.push_str("}\n\n");
            }
        }

        output
    }
}
