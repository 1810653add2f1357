//! # Provider Configuration
//!
//! Resolves the Auth0 provider settings (`domain`, `client_id`,
//! `client_secret`, `debug`) into a validated [`ProviderConfig`].
//!
//! This crate provides:
//! - The setting catalogue with environment fallback keys
//! - Ordered configuration sources (explicit values, environment, files)
//! - Precedence-based resolution (explicit > env > file > none)
//! - Domain validation
//!
//! # Usage
//!
//! ```rust,no_run
//! use config::{ExplicitSource, Resolver};
//!
//! fn main() -> Result<(), errors::ConfigError> {
//!     let explicit = ExplicitSource::new().with_value(config::Setting::Debug, true);
//!     let config = Resolver::standard(explicit).resolve()?;
//!     println!("Auth0 domain: {}", config.domain());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod file_loader;
pub mod loader;
pub mod precedence;
pub mod setting;
pub mod source;
pub mod validator;

pub use config::{ProviderConfig, Secret};
pub use errors::ConfigError;
pub use file_loader::{FileSettings, FileSource, load_from_file, load_from_toml, load_from_yaml};
pub use loader::EnvSource;
pub use precedence::Resolver;
pub use setting::{RawValue, Setting, parse_debug_flag};
pub use source::{ConfigSource, ExplicitSource};

/// Resolve a configuration from explicit values with environment fallback.
pub fn resolve(explicit: ExplicitSource) -> Result<ProviderConfig, ConfigError> {
    Resolver::standard(explicit).resolve()
}
