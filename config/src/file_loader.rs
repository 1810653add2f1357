//! # Configuration File Source
//!
//! Loads provider settings from TOML or YAML files.
//!
//! Supports automatic format detection based on file extension. Every key is
//! optional; a file may hold only the client secret, for example.
//!
//! ```toml
//! domain = "example.eu.auth0.com"
//! client_id = "abc123"
//! client_secret = "s3cr3t"
//! debug = true
//! ```

use crate::setting::{RawValue, Setting};
use crate::source::ConfigSource;
use errors::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("Config file has no extension")]
    NoExtension,

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String)
}

/// Settings as they appear in a configuration file.
#[derive(Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>
}

impl fmt::Debug for FileSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSettings")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("debug", &self.debug)
            .finish()
    }
}

/// Load settings from a TOML file.
pub fn load_from_toml(path: &Path) -> Result<FileSettings, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    toml::from_str(&contents).map_err(|e| ConfigFileError::TomlParse(e.to_string()))
}

/// Load settings from a YAML file.
pub fn load_from_yaml(path: &Path) -> Result<FileSettings, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigFileError::YamlParse(e.to_string()))
}

/// Load settings from file, detecting the format from the extension.
///
/// ## Supported Formats
/// - `.toml`: TOML format
/// - `.yaml`: YAML format
/// - `.yml`: YAML format
pub fn load_from_file(path: &Path) -> Result<FileSettings, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(ConfigFileError::NoExtension)?;

    match extension.to_lowercase().as_str() {
        "toml" => load_from_toml(path),
        "yaml" | "yml" => load_from_yaml(path),
        other => Err(ConfigFileError::UnsupportedFormat(other.to_string()))
    }
}

/// Source backed by a parsed configuration file.
#[derive(Debug, Clone)]
pub struct FileSource {
    name: String,
    settings: FileSettings
}

impl FileSource {
    /// Reads and parses `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let settings = load_from_file(path).map_err(|e| ConfigError::File {
            path: path.display().to_string(),
            reason: e.to_string()
        })?;

        tracing::debug!(path = %path.display(), "Loaded provider settings file");
        Ok(Self::from_settings(path.to_path_buf(), settings))
    }

    pub fn from_settings(path: PathBuf, settings: FileSettings) -> Self {
        Self {
            name: format!("file:{}", path.display()),
            settings
        }
    }

    pub fn settings(&self) -> &FileSettings {
        &self.settings
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, setting: Setting) -> Option<RawValue> {
        match setting {
            Setting::Domain => self.settings.domain.clone().map(RawValue::Str),
            Setting::ClientId => self.settings.client_id.clone().map(RawValue::Str),
            Setting::ClientSecret => self.settings.client_secret.clone().map(RawValue::Str),
            Setting::Debug => self.settings.debug.map(RawValue::Bool)
        }
    }
}
