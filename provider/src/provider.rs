//! The provider definition and its one-shot configure step.

use crate::factory::{ClientFactory, ClientHandle};
use crate::identity::IdentityString;
use crate::resources::ResourceKind;
use crate::schema::ProviderSchema;
use config::{ExplicitSource, Resolver};
use errors::ProviderError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

struct Configured {
    meta: ClientHandle,
    terraform_version: String,
    identity: IdentityString
}

/// Provider definition: schema, registered resources and, once configured,
/// the Management API client shared by every resource operation.
///
/// A provider starts unconfigured. `configure` succeeds at most once; a
/// failed attempt leaves it unconfigured so the host may retry.
pub struct Provider {
    schema: ProviderSchema,
    resources: BTreeMap<&'static str, ResourceKind>,
    factory: ClientFactory,
    state: OnceLock<Configured>
}

/// Creates a fresh, unconfigured provider.
pub fn new_provider() -> Provider {
    Provider::new(ClientFactory::default())
}

impl Provider {
    pub fn new(factory: ClientFactory) -> Self {
        let resources = ResourceKind::all()
            .into_iter()
            .map(|kind| (kind.type_name(), kind))
            .collect();

        Self {
            schema: ProviderSchema::new(),
            resources,
            factory,
            state: OnceLock::new()
        }
    }

    /// Replaces the client factory. Only meaningful before `configure`.
    pub fn with_factory(mut self, factory: ClientFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn schema(&self) -> &ProviderSchema {
        &self.schema
    }

    pub fn resources(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.resources.values().copied()
    }

    pub fn resource(&self, type_name: &str) -> Option<ResourceKind> {
        self.resources.get(type_name).copied()
    }

    /// Resolves explicit values against the process environment and builds
    /// the client.
    pub fn configure(
        &self,
        values: ExplicitSource,
        terraform_version: &str
    ) -> Result<ClientHandle, ProviderError> {
        self.configure_with(&Resolver::standard(values), terraform_version)
    }

    /// Like [`Provider::configure`], taking the provider block as JSON.
    pub fn configure_json(
        &self,
        values: &Value,
        terraform_version: &str
    ) -> Result<ClientHandle, ProviderError> {
        let explicit = ExplicitSource::try_from(values)?;
        self.configure(explicit, terraform_version)
    }

    /// Configures the provider from an arbitrary source chain.
    pub fn configure_with(
        &self,
        resolver: &Resolver,
        terraform_version: &str
    ) -> Result<ClientHandle, ProviderError> {
        if self.is_configured() {
            warn!("Configure called on an already configured provider");
            return Err(ProviderError::AlreadyConfigured);
        }

        debug!(sources = ?resolver.source_names(), "Resolving provider configuration");
        let config = resolver.resolve().inspect_err(|e| {
            warn!(error = %e, "Provider configuration could not be resolved");
        })?;

        let (meta, identity) = self.factory.build_identified(&config, terraform_version)?;
        let configured = Configured {
            meta: meta.clone(),
            terraform_version: terraform_version.to_string(),
            identity
        };

        self.state
            .set(configured)
            .map_err(|_| ProviderError::AlreadyConfigured)?;

        info!(
            domain = %config.domain(),
            terraform_version = %terraform_version,
            "Provider configured"
        );
        Ok(meta)
    }

    pub fn is_configured(&self) -> bool {
        self.state.get().is_some()
    }

    /// Client handle produced by `configure`.
    pub fn meta(&self) -> Option<ClientHandle> {
        self.state.get().map(|s| s.meta.clone())
    }

    pub fn terraform_version(&self) -> Option<&str> {
        self.state.get().map(|s| s.terraform_version.as_str())
    }

    pub fn identity(&self) -> Option<&IdentityString> {
        self.state.get().map(|s| &s.identity)
    }
}

impl Default for Provider {
    fn default() -> Self {
        new_provider()
    }
}
