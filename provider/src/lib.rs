//! # Auth0 Provider
//!
//! Provider definition for the Auth0 Terraform provider.
//!
//! This crate provides:
//! - The provider configuration schema (`domain`, `client_id`,
//!   `client_secret`, `debug`)
//! - The registry of resource types exposed to Terraform
//! - The client factory turning a resolved configuration into an
//!   authenticated Management API client
//! - The one-shot configure step that hands that client to the host runtime
//!
//! The per-resource CRUD mappings and the plugin protocol live outside this
//! crate.

pub mod diagnostics;
pub mod factory;
pub mod identity;
pub mod provider;
pub mod resources;
pub mod schema;

pub use diagnostics::{Diagnostic, Severity};
pub use factory::{ClientFactory, ClientHandle};
pub use identity::{HostMetadata, IdentityString, PLUGIN_PROTOCOL_VERSION, PluginSdkMetadata};
pub use provider::{Provider, new_provider};
pub use resources::ResourceKind;
pub use schema::{Attribute, AttributeType, ProviderSchema};

/// Release version of the provider.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
