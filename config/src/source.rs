//! # Configuration Sources
//!
//! A source answers "what value, if any, do you hold for this setting".
//! Sources are queried by the [`Resolver`](crate::Resolver) in priority
//! order, so new kinds of sources can be added without touching callers.

use crate::setting::{RawValue, Setting};
use errors::ConfigError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A named provider of raw setting values.
pub trait ConfigSource: Send + Sync {
    /// Name used in resolution logs.
    fn name(&self) -> &str;

    fn lookup(&self, setting: Setting) -> Option<RawValue>;
}

/// Values supplied directly by the caller (the provider block).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitSource {
    values: BTreeMap<Setting, RawValue>
}

impl ExplicitSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, setting: Setting, value: impl Into<RawValue>) -> Self {
        self.values.insert(setting, value.into());
        self
    }

    pub fn set(&mut self, setting: Setting, value: impl Into<RawValue>) {
        self.values.insert(setting, value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for ExplicitSource {
    fn name(&self) -> &str {
        "explicit"
    }

    fn lookup(&self, setting: Setting) -> Option<RawValue> {
        self.values.get(&setting).cloned()
    }
}

/// Builds explicit values from the JSON object the host passes for the
/// provider block. `null` entries are treated as absent.
impl TryFrom<&Value> for ExplicitSource {
    type Error = ConfigError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::default()),
            _ => return Err(ConfigError::invalid("provider", "expected an object"))
        };

        let mut source = Self::default();
        for (key, raw) in object {
            let setting = Setting::from_str(key)
                .map_err(|_| ConfigError::invalid(key.clone(), "unknown provider setting"))?;
            match raw {
                Value::Null => {}
                Value::String(s) => source.set(setting, s.clone()),
                Value::Bool(b) => source.set(setting, *b),
                _ => {
                    return Err(ConfigError::invalid(
                        key.clone(),
                        "expected a string or boolean"
                    ));
                }
            }
        }
        Ok(source)
    }
}
