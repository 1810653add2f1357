//! # Environment Variable Source
//!
//! Reads settings from the process environment.
//!
//! ## Environment Variables
//! - `AUTH0_DOMAIN`: Auth0 tenant domain
//! - `AUTH0_CLIENT_ID`: Machine-to-machine client ID
//! - `AUTH0_CLIENT_SECRET`: Machine-to-machine client secret
//! - `AUTH0_DEBUG`: `1`, `true` or `on` enables debug logging

use crate::setting::{RawValue, Setting};
use crate::source::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Environment fallback source.
///
/// Reads the real process environment unless built from a fixed map.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    fixed: Option<HashMap<String, String>>
}

impl EnvSource {
    pub fn process() -> Self {
        Self { fixed: None }
    }

    /// Environment backed by a fixed map instead of the process environment.
    pub fn from_map<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect()
            )
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        match &self.fixed {
            Some(vars) => vars.get(key).cloned(),
            None => env::var(key).ok()
        }
    }
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    /// An empty variable counts as unset.
    fn lookup(&self, setting: Setting) -> Option<RawValue> {
        self.var(setting.env_key())
            .map(RawValue::Str)
            .filter(|value| !value.is_empty())
    }
}
