//! # Provider Errors
//!
//! Error taxonomy shared by the configuration resolver, the client factory
//! and the provider definition.
//!
//! - Uses `thiserror` for structured error definitions
//! - Variants carry named fields so callers can point at the offending setting
//! - Both kinds are returned to the host runtime, never retried here

use serde::Serialize;
use thiserror::Error;

/// Boxed error produced by the management client library.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration resolution errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required configuration missing: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Config file {path} unreadable: {reason}")]
    File { path: String, reason: String }
}

impl ConfigError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into()
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into()
        }
    }

    /// Name of the setting the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { field } | Self::InvalidValue { field, .. } => Some(field),
            Self::File { .. } => None
        }
    }
}

/// Provider lifecycle errors surfaced to the host runtime
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Client construction failed: {source}")]
    ClientConstruction { source: BoxedSource },

    #[error("Provider is already configured")]
    AlreadyConfigured
}

impl ProviderError {
    pub fn client_construction(source: impl Into<BoxedSource>) -> Self {
        Self::ClientConstruction {
            source: source.into()
        }
    }

    /// Error category, as reported in diagnostics and logs.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(ConfigError::MissingRequired { .. }) => ErrorKind::MissingRequiredConfig,
            Self::Config(_) => ErrorKind::InvalidConfig,
            Self::ClientConstruction { .. } => ErrorKind::ClientConstructionFailure,
            Self::AlreadyConfigured => ErrorKind::AlreadyConfigured
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Config(e) => e.field(),
            _ => None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingRequiredConfig,
    InvalidConfig,
    ClientConstructionFailure,
    AlreadyConfigured
}
