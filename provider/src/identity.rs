//! Identification string sent as the `User-Agent` of every Management API
//! request.

use serde::Serialize;
use std::fmt;

/// Plugin protocol version reported as the host SDK version.
pub const PLUGIN_PROTOCOL_VERSION: &str = "5.2";

/// Version information the host runtime exposes about itself.
pub trait HostMetadata: Send + Sync {
    fn sdk_version(&self) -> String;
}

/// Host metadata for the plugin protocol this provider implements.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginSdkMetadata;

impl HostMetadata for PluginSdkMetadata {
    fn sdk_version(&self) -> String {
        PLUGIN_PROTOCOL_VERSION.to_string()
    }
}

/// The four version tokens making up the identification string.
///
/// Rendering is a pure function of the tokens, so equal inputs always give
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityString {
    pub provider_version: String,
    pub client_version: String,
    pub sdk_version: String,
    pub terraform_version: String
}

impl IdentityString {
    pub fn new(
        provider_version: impl Into<String>,
        client_version: impl Into<String>,
        sdk_version: impl Into<String>,
        terraform_version: impl Into<String>
    ) -> Self {
        Self {
            provider_version: provider_version.into(),
            client_version: client_version.into(),
            sdk_version: sdk_version.into(),
            terraform_version: terraform_version.into()
        }
    }

    /// Identity of this build, with the host-supplied Terraform version
    /// passed through unmodified.
    pub fn current(host: &dyn HostMetadata, terraform_version: &str) -> Self {
        Self::new(
            crate::VERSION,
            auth0_management::VERSION,
            host.sdk_version(),
            terraform_version
        )
    }
}

impl fmt::Display for IdentityString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Terraform-Provider-Auth0/{} (Rust-Auth0-Management/{}; Terraform-SDK/{}; Terraform/{})",
            self.provider_version, self.client_version, self.sdk_version, self.terraform_version
        )
    }
}
