//! Generator configuration.
//!
//! Options come from three places, highest precedence first: command-line
//! flags or their environment variables, the protoc plugin parameter
//! (`--mice_out=file_prefix=api/,style=split:out`), and built-in defaults.

use crate::error::PluginError;
use clap::Parser;
use mice_codegen::ContractStyle;
use std::path::PathBuf;

/// Command-line interface of the plugin.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "protoc-gen-mice",
    version,
    about = "protoc plugin generating Go clients and handler registration for mice services"
)]
pub struct Cli {
    /// Read the code generator request from this file instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Prefix trimmed from schema file names when deriving service addresses.
    #[arg(long, env = "MICE_FILE_PREFIX", value_name = "PREFIX")]
    pub file_prefix: Option<String>,

    /// Contract style to generate (`unified` or `split`).
    #[arg(long, env = "MICE_STYLE", value_name = "STYLE")]
    pub style: Option<ContractStyle>,
}

impl Cli {
    /// Returns the options set on the command line or in the environment.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            file_prefix: self.file_prefix.clone(),
            style: self.style,
        }
    }
}

/// Partially specified options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// File prefix, if set.
    pub file_prefix: Option<String>,
    /// Contract style, if set.
    pub style: Option<ContractStyle>,
}

impl Overrides {
    /// Parses a protoc plugin parameter string.
    ///
    /// The parameter is a comma-separated list of `key=value` pairs.
    /// Unknown keys are ignored with a warning.
    ///
    /// # Errors
    /// Returns `PluginError::InvalidParameter` if a known key has no value
    /// or an invalid one.
    pub fn from_parameter(parameter: &str) -> Result<Self, PluginError> {
        let mut overrides = Self::default();

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = match part.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value)),
                None => (part, None),
            };

            match (key, value) {
                ("file_prefix", Some(value)) => overrides.file_prefix = Some(value.to_string()),
                ("style", Some(value)) => {
                    let style = value
                        .parse::<ContractStyle>()
                        .map_err(|e| PluginError::invalid_parameter(part, e.to_string()))?;
                    overrides.style = Some(style);
                }
                ("file_prefix" | "style", None) => {
                    return Err(PluginError::invalid_parameter(part, "missing value"));
                }
                _ => tracing::warn!("Ignoring unknown parameter '{}'", part),
            }
        }

        Ok(overrides)
    }

    /// Returns `self` with unset options taken from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            file_prefix: self.file_prefix.or(fallback.file_prefix),
            style: self.style.or(fallback.style),
        }
    }
}

/// Fully resolved options for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prefix trimmed from schema file stems when deriving service addresses.
    pub file_prefix: String,
    /// Contract style to render.
    pub style: ContractStyle,
}

impl GeneratorOptions {
    /// Resolves options from the flags/environment and the protoc parameter.
    ///
    /// # Errors
    /// Returns `PluginError::InvalidParameter` if the parameter is malformed.
    pub fn resolve(overrides: &Overrides, parameter: Option<&str>) -> Result<Self, PluginError> {
        let from_request = match parameter {
            Some(parameter) => Overrides::from_parameter(parameter)?,
            None => Overrides::default(),
        };
        let merged = overrides.clone().or(from_request);

        Ok(Self {
            file_prefix: merged.file_prefix.unwrap_or_default(),
            style: merged.style.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parameter() {
        let overrides =
            Overrides::from_parameter("file_prefix=api/,style=split").expect("Failed to parse");
        assert_eq!(overrides.file_prefix.as_deref(), Some("api/"));
        assert_eq!(overrides.style, Some(ContractStyle::Split));
    }

    #[test]
    fn test_parse_empty_parameter() {
        assert_eq!(
            Overrides::from_parameter("").expect("Failed to parse"),
            Overrides::default()
        );
        assert_eq!(
            Overrides::from_parameter(" , ").expect("Failed to parse"),
            Overrides::default()
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let overrides =
            Overrides::from_parameter("paths=source_relative,style=unified").expect("Failed");
        assert_eq!(overrides.style, Some(ContractStyle::Unified));
        assert_eq!(overrides.file_prefix, None);
    }

    #[test]
    fn test_invalid_parameter() {
        let err = Overrides::from_parameter("style=legacy").expect_err("Expected error");
        assert!(matches!(err, PluginError::InvalidParameter { .. }));

        let err = Overrides::from_parameter("file_prefix").expect_err("Expected error");
        assert!(err.to_string().contains("missing value"));
    }

    #[test]
    fn test_resolve_defaults() {
        let options = GeneratorOptions::resolve(&Overrides::default(), None).expect("Failed");
        assert_eq!(options, GeneratorOptions::default());
        assert_eq!(options.file_prefix, "");
        assert_eq!(options.style, ContractStyle::Unified);
    }

    #[test]
    fn test_resolve_parameter_used_when_not_overridden() {
        let options = GeneratorOptions::resolve(
            &Overrides::default(),
            Some("file_prefix=api/,style=split"),
        )
        .expect("Failed to resolve");
        assert_eq!(options.file_prefix, "api/");
        assert_eq!(options.style, ContractStyle::Split);
    }

    #[test]
    fn test_resolve_overrides_win() {
        let overrides = Overrides {
            file_prefix: Some("proto/".to_string()),
            style: None,
        };
        let options =
            GeneratorOptions::resolve(&overrides, Some("file_prefix=api/,style=split"))
                .expect("Failed to resolve");
        assert_eq!(options.file_prefix, "proto/");
        assert_eq!(options.style, ContractStyle::Split);
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from([
            "protoc-gen-mice",
            "--input",
            "request.bin",
            "--file-prefix",
            "api/",
            "--style",
            "split",
        ])
        .expect("Failed to parse args");

        assert_eq!(cli.input, Some(PathBuf::from("request.bin")));
        assert_eq!(
            cli.overrides(),
            Overrides {
                file_prefix: Some("api/".to_string()),
                style: Some(ContractStyle::Split),
            }
        );
    }

    #[test]
    fn test_cli_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["protoc-gen-mice", "--style", "legacy"]).is_err());
    }
}
