//! Client factory: turns a resolved configuration into an authenticated
//! Management API client handle.

use crate::identity::{HostMetadata, IdentityString, PluginSdkMetadata};
use auth0_management::{ManagementClient, RetryConfig};
use config::ProviderConfig;
use errors::ProviderError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Shared handle passed to every resource operation.
pub type ClientHandle = Arc<ManagementClient>;

#[derive(Clone)]
pub struct ClientFactory {
    host: Arc<dyn HostMetadata>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>
}

impl std::fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientFactory")
            .field("sdk_version", &self.host.sdk_version())
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientFactory {
    pub fn new() -> Self {
        Self::with_host(Arc::new(PluginSdkMetadata))
    }

    pub fn with_host(host: Arc<dyn HostMetadata>) -> Self {
        Self {
            host,
            retry: None,
            timeout: None
        }
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn identity(&self, terraform_version: &str) -> IdentityString {
        IdentityString::current(self.host.as_ref(), terraform_version)
    }

    /// Builds the client. No request reaches Auth0 here; the credential
    /// exchange runs on the first API call.
    pub fn build(
        &self,
        config: &ProviderConfig,
        terraform_version: &str
    ) -> Result<ClientHandle, ProviderError> {
        self.build_identified(config, terraform_version)
            .map(|(handle, _)| handle)
    }

    /// Like [`ClientFactory::build`], also returning the identity the
    /// client was built with.
    pub fn build_identified(
        &self,
        config: &ProviderConfig,
        terraform_version: &str
    ) -> Result<(ClientHandle, IdentityString), ProviderError> {
        let identity = self.identity(terraform_version);

        let mut builder = ManagementClient::builder(config.domain())
            .client_credentials(config.client_id(), config.client_secret().expose())
            .debug(config.debug())
            .user_agent(identity.to_string());

        if let Some(retry) = &self.retry {
            builder = builder.retry(retry.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        match builder.build() {
            Ok(client) => {
                info!(
                    domain = %config.domain(),
                    debug = config.debug(),
                    user_agent = %client.user_agent(),
                    "Management client ready"
                );
                Ok((Arc::new(client), identity))
            }
            Err(e) => {
                warn!(domain = %config.domain(), error = %e, "Management client construction failed");
                Err(ProviderError::client_construction(e))
            }
        }
    }
}

impl Default for ClientFactory {
    fn default() -> Self {
        Self::new()
    }
}
