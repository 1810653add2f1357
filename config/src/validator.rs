//! # Configuration Validation
//!
//! Validation rules for resolved settings, expressed with the `validator`
//! crate.
//!
//! ## Validation Rules
//! - `domain`: optional `http://` or `https://` scheme, a host made of
//!   letters, digits, `-` and `.`, an optional `:port` and an optional
//!   trailing `/`
//! - `client_id`: no surrounding or embedded whitespace

use errors::ConfigError;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?(?::[0-9]{1,5})?/?$")
        .expect("domain pattern is a valid regex")
});

pub(crate) fn validate_domain(value: &str) -> Result<(), ValidationError> {
    if DOMAIN_PATTERN.is_match(value) && !value.contains("..") {
        Ok(())
    } else {
        Err(ValidationError::new("domain_format")
            .with_message(Cow::Borrowed("must be a hostname such as example.auth0.com")))
    }
}

pub(crate) fn validate_client_id(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_whitespace) {
        Err(ValidationError::new("client_id_format")
            .with_message(Cow::Borrowed("must not contain whitespace")))
    } else {
        Ok(())
    }
}

/// Converts `validator` output into a [`ConfigError`] naming the first
/// offending field in alphabetical order.
pub(crate) fn validation_to_config_error(errors: ValidationErrors) -> ConfigError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    let Some(field) = fields.first() else {
        return ConfigError::invalid("config", "validation failed");
    };

    let reason = field_errors
        .get(*field)
        .and_then(|errs| errs.first())
        .map(|e| {
            e.message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| e.code.to_string())
        })
        .unwrap_or_else(|| "invalid value".to_string());

    ConfigError::invalid(field.to_string(), reason)
}
