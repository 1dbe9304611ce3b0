//! File-level code generation.

use crate::go::{ContractGenerator, RegistrationGenerator, StubGenerator};
use crate::style::ContractStyle;
use mice_schema::SchemaFile;

/// Module path of the mice network client.
pub const CLIENT_IMPORT: &str = "github.com/MouseHatGames/mice/client";

/// Module path of the mice serving runtime.
pub const SERVER_IMPORT: &str = "github.com/MouseHatGames/mice/server";

/// One generated output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to the protoc output directory.
    pub name: String,
    /// Go source text.
    pub content: String,
}

/// Renders the Go source for one schema file.
pub struct Generator<'a> {
    file: &'a SchemaFile,
    style: ContractStyle,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for `file`.
    #[must_use]
    pub fn new(file: &'a SchemaFile, style: ContractStyle) -> Self {
        Self { file, style }
    }

    /// Generates the complete Go source.
    ///
    /// Services are emitted in declaration order, each as its contracts,
    /// client stub with constructors, and registration function.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_preamble();

        let contracts = ContractGenerator::new(self.style);
        let stubs = StubGenerator::new(self.style);
        let registration = RegistrationGenerator::new(self.style);

        for svc in &self.file.services {
            output.push('\n');
            output.push_str(&contracts.generate(svc));
            output.push('\n');
            output.push_str(&stubs.generate(svc));
            output.push_str(&registration.generate(svc));
        }

        output
    }

    /// Generates the header comment, package clause and imports.
    fn generate_preamble(&self) -> String {
        let mut output = String::new();

        output.push_str("// Code generated by protoc-gen-mice. DO NOT EDIT.\n");
        output.push_str(&format!("// source: {}\n\n", self.file.source_name));
        output.push_str(&format!("package {}\n\n", self.file.go_package));

        output.push_str("import (\n");
        // Interfaces without methods never mention context.
        if self.file.method_count() > 0 {
            output.push_str("\t\"context\"\n\n");
        }
        output.push_str(&format!("\t\"{}\"\n", CLIENT_IMPORT));
        output.push_str(&format!("\t\"{}\"\n", SERVER_IMPORT));
        output.push_str(")\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mice_schema::{ResolvedMethod, ResolvedService};
    use prost_types::{
        FileDescriptorProto, FileOptions, MethodDescriptorProto, ServiceDescriptorProto,
    };

    fn greeter() -> SchemaFile {
        let desc = FileDescriptorProto {
            name: Some("greeter.proto".to_string()),
            package: Some("greet".to_string()),
            options: Some(FileOptions {
                go_package: Some("example.com/greet;greet".to_string()),
                ..Default::default()
            }),
            service: vec![ServiceDescriptorProto {
                name: Some("Greeter".to_string()),
                method: vec![MethodDescriptorProto {
                    name: Some("SayHello".to_string()),
                    input_type: Some(".greet.HelloRequest".to_string()),
                    output_type: Some(".greet.HelloReply".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };
        SchemaFile::from_descriptor(&desc, "").expect("Failed to build IR")
    }

    fn service(name: &str, methods: usize) -> ResolvedService {
        ResolvedService {
            name: name.to_string(),
            address: "multi".to_string(),
            methods: (0..methods)
                .map(|i| ResolvedMethod {
                    name: format!("{name}Op{i}"),
                    input_type: "Req".to_string(),
                    output_type: "Resp".to_string(),
                })
                .collect(),
        }
    }

    fn multi(counts: &[usize]) -> SchemaFile {
        SchemaFile {
            source_name: "multi.proto".to_string(),
            package: "multi".to_string(),
            go_package: "multi".to_string(),
            stem: "multi".to_string(),
            short_name: "multi".to_string(),
            services: counts
                .iter()
                .enumerate()
                .map(|(i, &n)| service(&format!("Svc{i}"), n))
                .collect(),
        }
    }

    #[test]
    fn test_generate_greeter_unified() {
        let file = greeter();
        let output = Generator::new(&file, ContractStyle::Unified).generate();

        let expected = "// Code generated by protoc-gen-mice. DO NOT EDIT.
// source: greeter.proto

package greet

import (
\t\"context\"

\t\"github.com/MouseHatGames/mice/client\"
\t\"github.com/MouseHatGames/mice/server\"
)

type Greeter interface {
\tSayHello(ctx context.Context, req *HelloRequest) (*HelloReply, error)
}

type implGreeter struct {
\tc client.Client
\ts string
}

func (c *implGreeter) SayHello(ctx context.Context, req *HelloRequest) (*HelloReply, error) {
\tresp := new(HelloReply)
\tif err := c.c.Call(c.s, \"SayHello\", req, resp); err != nil {
\t\treturn nil, err
\t}
\treturn resp, nil
}

func NewGreeterClient(cl client.Client) Greeter {
\treturn &implGreeter{
\t\tc: cl,
\t\ts: \"greeter\",
\t}
}

func RegisterGreeterHandler(srv server.Server, handler Greeter) {
\tsrv.AddHandler(handler, \"SayHello\")
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_greeter_split() {
        let file = greeter();
        let output = Generator::new(&file, ContractStyle::Split).generate();

        assert_eq!(output.matches(" interface {\n").count(), 2);
        assert!(output.contains("type GreeterClient interface {\n"));
        assert!(output.contains("type GreeterHandler interface {\n"));
        assert!(output.contains("func NewGreeterClientWithAddress(svc string, cl client.Client)"));
        assert!(output.contains("handler GreeterHandler) {\n\tsrv.AddHandler(handler, \"SayHello\")"));
    }

    #[test]
    fn test_block_counts() {
        let file = multi(&[2, 0, 3]);

        let unified = Generator::new(&file, ContractStyle::Unified).generate();
        assert_eq!(unified.matches(" interface {\n").count(), 3);
        assert_eq!(unified.matches("c.c.Call(").count(), 5);
        assert_eq!(unified.matches("func Register").count(), 3);

        let split = Generator::new(&file, ContractStyle::Split).generate();
        assert_eq!(split.matches(" interface {\n").count(), 6);
        assert_eq!(split.matches("c.c.Call(").count(), 5);
    }

    #[test]
    fn test_services_in_declaration_order() {
        let file = multi(&[1, 1, 1]);
        let output = Generator::new(&file, ContractStyle::Unified).generate();

        let positions: Vec<usize> = ["type Svc0 ", "type Svc1 ", "type Svc2 "]
            .iter()
            .map(|needle| output.find(needle).expect("missing service"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let file = multi(&[3, 1, 4, 1, 5]);
        for style in [ContractStyle::Unified, ContractStyle::Split] {
            let first = Generator::new(&file, style).generate();
            let second = Generator::new(&file, style).generate();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_zero_method_service() {
        let file = multi(&[0]);
        let output = Generator::new(&file, ContractStyle::Unified).generate();

        assert!(!output.contains("\"context\""));
        assert!(output.contains("type Svc0 interface {\n}\n"));
        assert!(output.contains("\tsrv.AddHandler(handler)\n"));
    }

    #[test]
    fn test_generate_file_name() {
        let file = greeter();
        let generated = crate::generate_file(&file, ContractStyle::Unified);
        assert_eq!(generated.name, "greeter.pb.mice.go");
        assert_eq!(
            generated.content,
            Generator::new(&file, ContractStyle::Unified).generate()
        );
    }
}
