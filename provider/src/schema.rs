//! Provider configuration schema.

use config::Setting;
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Bool
}

/// One attribute of the provider block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub sensitive: bool,
    /// Environment variable used when the attribute is not set.
    pub env_fallback: &'static str,
    pub description: &'static str
}

impl Attribute {
    pub fn for_setting(setting: Setting) -> Self {
        let attr_type = match setting {
            Setting::Debug => AttributeType::Bool,
            _ => AttributeType::String
        };

        Self {
            name: setting_name(setting),
            attr_type,
            required: setting.is_required(),
            optional: !setting.is_required(),
            sensitive: setting.is_sensitive(),
            env_fallback: setting.env_key(),
            description: setting.description()
        }
    }
}

fn setting_name(setting: Setting) -> &'static str {
    match setting {
        Setting::Domain => "domain",
        Setting::ClientId => "client_id",
        Setting::ClientSecret => "client_secret",
        Setting::Debug => "debug"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    pub attributes: Vec<Attribute>
}

impl ProviderSchema {
    pub fn new() -> Self {
        Self {
            attributes: Setting::iter().map(Attribute::for_setting).collect()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Default for ProviderSchema {
    fn default() -> Self {
        Self::new()
    }
}
