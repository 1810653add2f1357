//! # Provider Settings
//!
//! The four settings the provider accepts and the raw values sources hand
//! back for them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A named provider setting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Setting {
    /// Auth0 tenant domain, e.g. `example.eu.auth0.com`
    Domain,
    /// Client ID of the machine-to-machine application
    ClientId,
    /// Client secret of the machine-to-machine application
    ClientSecret,
    /// Verbose request/response logging in the management client
    Debug
}

impl Setting {
    /// Settings that must resolve to a non-empty string.
    pub const REQUIRED: [Setting; 3] = [Setting::Domain, Setting::ClientId, Setting::ClientSecret];

    /// Environment variable consulted when no explicit value is given.
    pub const fn env_key(self) -> &'static str {
        match self {
            Self::Domain => "AUTH0_DOMAIN",
            Self::ClientId => "AUTH0_CLIENT_ID",
            Self::ClientSecret => "AUTH0_CLIENT_SECRET",
            Self::Debug => "AUTH0_DEBUG"
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Debug)
    }

    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::ClientSecret)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Domain => "Your Auth0 domain name. It can also be sourced from the AUTH0_DOMAIN environment variable.",
            Self::ClientId => "Your Auth0 client ID. It can also be sourced from the AUTH0_CLIENT_ID environment variable.",
            Self::ClientSecret => "Your Auth0 client secret. It can also be sourced from the AUTH0_CLIENT_SECRET environment variable.",
            Self::Debug => "Enables HTTP request and response logging. It can also be sourced from the AUTH0_DEBUG environment variable."
        }
    }
}

/// Value for a setting as supplied by a source, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Str(String)
}

impl RawValue {
    /// Empty strings from the environment count as "not supplied".
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }

    /// Rendering suitable for logs; sensitive values are masked.
    pub fn display_for(&self, setting: Setting) -> String {
        match self {
            _ if setting.is_sensitive() => "***".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Str(s) => s.clone()
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Interprets a textual debug flag.
///
/// Only `"1"`, `"true"` and `"on"` are truthy; the match is exact and
/// case-sensitive, so `"TRUE"` or `"yes"` resolve to `false`.
pub fn parse_debug_flag(value: &str) -> bool {
    matches!(value, "1" | "true" | "on")
}
