//! # Configuration Precedence
//!
//! Resolves each setting from an ordered list of sources.
//!
//! # Precedence Order
//! 1. Explicit values from the provider block (highest priority)
//! 2. Environment variables
//! 3. Any further sources appended with [`Resolver::with_source`]
//!    (e.g. a credentials file)
//!
//! The first source holding a value for a setting wins, so an explicit empty
//! string is never replaced by the environment. Required settings with no
//! usable value fail with
//! [`ConfigError::MissingRequired`]; `debug` always resolves, defaulting to
//! `false`.

use crate::config::ProviderConfig;
use crate::loader::EnvSource;
use crate::setting::{RawValue, Setting, parse_debug_flag};
use crate::source::{ConfigSource, ExplicitSource};
use errors::ConfigError;

/// Ordered chain of configuration sources.
#[derive(Default)]
pub struct Resolver {
    sources: Vec<Box<dyn ConfigSource>>
}

impl Resolver {
    /// An empty chain. Resolution fails on the first required setting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit values first, then the process environment.
    pub fn standard(explicit: ExplicitSource) -> Self {
        Self::new()
            .with_source(explicit)
            .with_source(EnvSource::process())
    }

    /// Appends a source with lower priority than every source already added.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Produces a validated configuration.
    ///
    /// Required settings are checked in the order `domain`, `client_id`,
    /// `client_secret`; the first missing one is reported.
    pub fn resolve(&self) -> Result<ProviderConfig, ConfigError> {
        let domain = self.resolve_string(Setting::Domain)?;
        let client_id = self.resolve_string(Setting::ClientId)?;
        let client_secret = self.resolve_string(Setting::ClientSecret)?;
        let debug = self.resolve_debug();

        ProviderConfig::new(domain, client_id, client_secret, debug)
    }

    fn first_value(&self, setting: Setting) -> Option<(&str, RawValue)> {
        self.sources.iter().find_map(|source| {
            source
                .lookup(setting)
                .map(|value| (source.name(), value))
        })
    }

    fn resolve_string(&self, setting: Setting) -> Result<String, ConfigError> {
        match self.first_value(setting) {
            Some((source, RawValue::Str(value))) => {
                tracing::debug!(
                    setting = %setting,
                    source = source,
                    value = %RawValue::Str(value.clone()).display_for(setting),
                    "Resolved provider setting"
                );
                Ok(value)
            }
            Some((source, RawValue::Bool(_))) => Err(ConfigError::invalid(
                setting.as_ref(),
                format!("expected a string, got a boolean from {source}")
            )),
            None => Err(ConfigError::missing(setting.as_ref()))
        }
    }

    fn resolve_debug(&self) -> bool {
        let Some((source, value)) = self.first_value(Setting::Debug) else {
            return false;
        };

        let debug_enabled = match value {
            RawValue::Bool(b) => b,
            RawValue::Str(s) => parse_debug_flag(&s)
        };
        tracing::debug!(source = source, debug = debug_enabled, "Resolved provider setting debug");
        debug_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_loader::{FileSettings, FileSource};
    use std::path::PathBuf;

    fn full_env() -> EnvSource {
        EnvSource::from_map([
            ("AUTH0_DOMAIN", "env.auth0.com"),
            ("AUTH0_CLIENT_ID", "env-client"),
            ("AUTH0_CLIENT_SECRET", "env-secret"),
            ("AUTH0_DEBUG", "true")
        ])
    }

    fn resolver(explicit: ExplicitSource, env: EnvSource) -> Resolver {
        Resolver::new().with_source(explicit).with_source(env)
    }

    #[test]
    fn test_explicit_takes_precedence_over_env() {
        let explicit = ExplicitSource::new()
            .with_value(Setting::Domain, "explicit.auth0.com")
            .with_value(Setting::ClientId, "explicit-client")
            .with_value(Setting::ClientSecret, "explicit-secret")
            .with_value(Setting::Debug, false);

        let config = resolver(explicit, full_env()).resolve().unwrap();
        assert_eq!(config.domain(), "explicit.auth0.com");
        assert_eq!(config.client_id(), "explicit-client");
        assert_eq!(config.client_secret().expose(), "explicit-secret");
        assert!(!config.debug());
    }

    #[test]
    fn test_env_fills_gaps_per_setting() {
        let explicit = ExplicitSource::new().with_value(Setting::ClientId, "explicit-client");

        let config = resolver(explicit, full_env()).resolve().unwrap();
        assert_eq!(config.domain(), "env.auth0.com");
        assert_eq!(config.client_id(), "explicit-client");
        assert_eq!(config.client_secret().expose(), "env-secret");
        assert!(config.debug());
    }

    #[test]
    fn test_missing_domain_is_reported() {
        let explicit = ExplicitSource::new()
            .with_value(Setting::ClientId, "id")
            .with_value(Setting::ClientSecret, "secret");

        let err = resolver(explicit, EnvSource::from_map(Vec::<(String, String)>::new()))
            .resolve()
            .unwrap_err();
        assert_eq!(err, ConfigError::missing("domain"));
    }

    #[test]
    fn test_missing_secret_is_reported() {
        let env = EnvSource::from_map([
            ("AUTH0_DOMAIN", "env.auth0.com"),
            ("AUTH0_CLIENT_ID", "env-client")
        ]);
        let err = resolver(ExplicitSource::new(), env).resolve().unwrap_err();
        assert_eq!(err, ConfigError::missing("client_secret"));
    }

    #[test]
    fn test_env_only_equals_explicit() {
        let from_env = resolver(ExplicitSource::new(), full_env()).resolve().unwrap();
        let explicit =
            ProviderConfig::new("env.auth0.com", "env-client", "env-secret", true).unwrap();
        assert_eq!(from_env, explicit);
    }

    #[test]
    fn test_debug_env_values() {
        let cases = [
            ("1", true),
            ("true", true),
            ("on", true),
            ("TRUE", false),
            ("yes", false),
            ("0", false),
            ("", false)
        ];

        for (value, expected) in cases {
            let env = EnvSource::from_map([
                ("AUTH0_DOMAIN", "env.auth0.com"),
                ("AUTH0_CLIENT_ID", "id"),
                ("AUTH0_CLIENT_SECRET", "secret"),
                ("AUTH0_DEBUG", value)
            ]);
            let config = resolver(ExplicitSource::new(), env).resolve().unwrap();
            assert_eq!(config.debug(), expected, "AUTH0_DEBUG={value:?}");
        }
    }

    #[test]
    fn test_debug_unset_defaults_false() {
        let env = EnvSource::from_map([
            ("AUTH0_DOMAIN", "env.auth0.com"),
            ("AUTH0_CLIENT_ID", "id"),
            ("AUTH0_CLIENT_SECRET", "secret")
        ]);
        let config = resolver(ExplicitSource::new(), env).resolve().unwrap();
        assert!(!config.debug());
    }

    #[test]
    fn test_explicit_debug_false_beats_truthy_env() {
        let explicit = ExplicitSource::new().with_value(Setting::Debug, false);
        let config = resolver(explicit, full_env()).resolve().unwrap();
        assert!(!config.debug());
    }

    #[test]
    fn test_empty_explicit_string_is_not_replaced_by_env() {
        let explicit = ExplicitSource::new()
            .with_value(Setting::Domain, "")
            .with_value(Setting::ClientId, "explicit-client")
            .with_value(Setting::ClientSecret, "explicit-secret");
        let err = resolver(explicit, full_env()).resolve().unwrap_err();
        assert_eq!(err, ConfigError::missing("domain"));
    }

    #[test]
    fn test_empty_env_value_falls_through_to_next_source() {
        let env = EnvSource::from_map([
            ("AUTH0_DOMAIN", ""),
            ("AUTH0_CLIENT_ID", "env-client"),
            ("AUTH0_CLIENT_SECRET", "env-secret")
        ]);
        let file = FileSource::from_settings(
            PathBuf::from("creds.toml"),
            FileSettings {
                domain: Some("file.auth0.com".to_string()),
                ..Default::default()
            }
        );
        let chain = Resolver::new().with_source(env).with_source(file);
        assert_eq!(chain.resolve().unwrap().domain(), "file.auth0.com");
    }

    #[test]
    fn test_boolean_for_string_setting_is_invalid() {
        let explicit = ExplicitSource::new().with_value(Setting::ClientId, true);
        let err = resolver(explicit, full_env()).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "client_id"));
    }

    #[test]
    fn test_malformed_domain_fails_validation() {
        let explicit = ExplicitSource::new().with_value(Setting::Domain, "bad domain");
        let err = resolver(explicit, full_env()).resolve().unwrap_err();
        assert_eq!(err.field(), Some("domain"));
    }

    #[test]
    fn test_file_source_below_env() {
        let file = FileSource::from_settings(
            PathBuf::from("creds.toml"),
            FileSettings {
                domain: Some("file.auth0.com".to_string()),
                client_secret: Some("file-secret".to_string()),
                ..Default::default()
            }
        );
        let env = EnvSource::from_map([
            ("AUTH0_DOMAIN", "env.auth0.com"),
            ("AUTH0_CLIENT_ID", "env-client")
        ]);

        let chain = Resolver::new()
            .with_source(ExplicitSource::new())
            .with_source(env)
            .with_source(file);

        assert_eq!(chain.source_names(), vec!["explicit", "env", "file:creds.toml"]);

        let config = chain.resolve().unwrap();
        assert_eq!(config.domain(), "env.auth0.com");
        assert_eq!(config.client_secret().expose(), "file-secret");
        assert!(!config.debug());
    }

    #[test]
    fn test_empty_chain_reports_domain() {
        let err = Resolver::new().resolve().unwrap_err();
        assert_eq!(err, ConfigError::missing("domain"));
    }
}
