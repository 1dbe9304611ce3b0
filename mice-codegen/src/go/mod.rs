//! Go code generation modules.

pub mod contracts;
pub mod registration;
pub mod stubs;

pub use contracts::ContractGenerator;
pub use registration::RegistrationGenerator;
pub use stubs::StubGenerator;

use mice_schema::ResolvedMethod;

/// Renders `value` as a Go interpreted string literal.
#[must_use]
pub fn go_string(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 2);
    output.push('"');
    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c => output.push(c),
        }
    }
    output.push('"');
    output
}

/// Renders the caller-side signature of a method (without receiver).
#[must_use]
pub fn caller_signature(method: &ResolvedMethod) -> String {
    format!(
        "{}(ctx context.Context, req *{}) (*{}, error)",
        method.name, method.input_type, method.output_type
    )
}

/// Renders the handler-side signature of a method, which receives a
/// pre-allocated response.
#[must_use]
pub fn handler_signature(method: &ResolvedMethod) -> String {
    format!(
        "{}(ctx context.Context, req *{}, resp *{}) error",
        method.name, method.input_type, method.output_type
    )
}
