//! Diagnostics returned to the host runtime when configuration fails.

use errors::{ErrorKind, ProviderError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Provider attribute the diagnostic points at, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&ProviderError> for Diagnostic {
    fn from(err: &ProviderError) -> Self {
        let summary = match err.kind() {
            ErrorKind::MissingRequiredConfig => "Missing required provider configuration",
            ErrorKind::InvalidConfig => "Invalid provider configuration",
            ErrorKind::ClientConstructionFailure => "Failed to create Auth0 management client",
            ErrorKind::AlreadyConfigured => "Provider already configured"
        };

        let diagnostic = Diagnostic::error(summary, err.to_string());
        match err.field() {
            Some(field) => diagnostic.with_attribute(field),
            None => diagnostic
        }
    }
}
