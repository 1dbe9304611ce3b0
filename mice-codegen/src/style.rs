//! Contract style selection.

use crate::error::CodegenError;
use mice_schema::ResolvedService;
use std::fmt;
use std::str::FromStr;

/// Shape of the contracts generated for each service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractStyle {
    /// One interface shared by callers and handlers; methods return
    /// `(*Resp, error)`.
    #[default]
    Unified,
    /// Separate `<Svc>Client` and `<Svc>Handler` interfaces. Handler methods
    /// fill in a response allocated by the serving runtime and return only
    /// an error. Clients may override the routing address.
    Split,
}

impl ContractStyle {
    /// Returns the configuration name of the style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unified => "unified",
            Self::Split => "split",
        }
    }

    /// Returns the name of the interface returned to callers.
    #[must_use]
    pub fn caller_contract(&self, svc: &ResolvedService) -> String {
        match self {
            Self::Unified => svc.name.clone(),
            Self::Split => svc.client_name(),
        }
    }

    /// Returns the name of the interface accepted at registration.
    #[must_use]
    pub fn handler_contract(&self, svc: &ResolvedService) -> String {
        match self {
            Self::Unified => svc.name.clone(),
            Self::Split => svc.handler_name(),
        }
    }

    /// Returns the name of the private stub struct.
    #[must_use]
    pub fn stub_name(&self, svc: &ResolvedService) -> String {
        format!("impl{}", self.caller_contract(svc))
    }
}

impl fmt::Display for ContractStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractStyle {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unified" => Ok(Self::Unified),
            "split" => Ok(Self::Split),
            _ => Err(CodegenError::unknown_style(s)),
        }
    }
}
