//! # Resolved Configuration
//!
//! [`ProviderConfig`] is the fully-resolved provider configuration. It can
//! only be obtained through [`ProviderConfig::new`] or the resolver, both of
//! which validate it, so holders never see a partially-resolved value.

use crate::setting::Setting;
use crate::validator::{validate_client_id, validate_domain, validation_to_config_error};
use errors::ConfigError;
use std::fmt;
use validator::Validate;
use zeroize::Zeroizing;

/// Sensitive string that is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Validated Auth0 provider configuration.
///
/// Immutable once built: fields are private and only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ProviderConfig {
    #[validate(custom(function = "validate_domain"))]
    domain: String,

    #[validate(custom(function = "validate_client_id"))]
    client_id: String,

    client_secret: Secret,

    debug: bool
}

impl ProviderConfig {
    /// Builds and validates a configuration from concrete values.
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        debug: bool
    ) -> Result<Self, ConfigError> {
        let config = Self {
            domain: domain.into(),
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret),
            debug
        };

        if config.domain.is_empty() {
            return Err(ConfigError::missing(Setting::Domain.as_ref()));
        }
        if config.client_id.is_empty() {
            return Err(ConfigError::missing(Setting::ClientId.as_ref()));
        }
        if config.client_secret.is_empty() {
            return Err(ConfigError::missing(Setting::ClientSecret.as_ref()));
        }

        config.validate().map_err(validation_to_config_error)?;
        Ok(config)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &Secret {
        &self.client_secret
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_config() {
        let config =
            ProviderConfig::new("example.eu.auth0.com", "client-id", "client-secret", true)
                .unwrap();
        assert_eq!(config.domain(), "example.eu.auth0.com");
        assert_eq!(config.client_id(), "client-id");
        assert_eq!(config.client_secret().expose(), "client-secret");
        assert!(config.debug());
    }

    #[test]
    fn test_new_rejects_empty_required_fields() {
        let err = ProviderConfig::new("", "id", "secret", false).unwrap_err();
        assert_eq!(err, ConfigError::missing("domain"));

        let err = ProviderConfig::new("example.auth0.com", "", "secret", false).unwrap_err();
        assert_eq!(err, ConfigError::missing("client_id"));

        let err = ProviderConfig::new("example.auth0.com", "id", "", false).unwrap_err();
        assert_eq!(err, ConfigError::missing("client_secret"));
    }

    #[test]
    fn test_new_rejects_malformed_domain() {
        let err = ProviderConfig::new("not a domain", "id", "secret", false).unwrap_err();
        assert_eq!(err.field(), Some("domain"));
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let config =
            ProviderConfig::new("example.auth0.com", "id", "super-secret-value", false).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("Secret(***)"));
    }
}
