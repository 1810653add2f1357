//! Resource types registered with the host runtime.
//!
//! Only the registration lives here; each type's CRUD mapping is handled by
//! its own resource implementation.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr
)]
pub enum ResourceKind {
    #[strum(serialize = "auth0_client")]
    #[serde(rename = "auth0_client")]
    Client,
    #[strum(serialize = "auth0_client_grant")]
    #[serde(rename = "auth0_client_grant")]
    ClientGrant,
    #[strum(serialize = "auth0_connection")]
    #[serde(rename = "auth0_connection")]
    Connection,
    #[strum(serialize = "auth0_custom_domain")]
    #[serde(rename = "auth0_custom_domain")]
    CustomDomain,
    #[strum(serialize = "auth0_resource_server")]
    #[serde(rename = "auth0_resource_server")]
    ResourceServer,
    #[strum(serialize = "auth0_rule")]
    #[serde(rename = "auth0_rule")]
    Rule,
    #[strum(serialize = "auth0_rule_config")]
    #[serde(rename = "auth0_rule_config")]
    RuleConfig,
    #[strum(serialize = "auth0_hook")]
    #[serde(rename = "auth0_hook")]
    Hook,
    #[strum(serialize = "auth0_prompt")]
    #[serde(rename = "auth0_prompt")]
    Prompt,
    #[strum(serialize = "auth0_email")]
    #[serde(rename = "auth0_email")]
    Email,
    #[strum(serialize = "auth0_email_template")]
    #[serde(rename = "auth0_email_template")]
    EmailTemplate,
    #[strum(serialize = "auth0_user")]
    #[serde(rename = "auth0_user")]
    User,
    #[strum(serialize = "auth0_tenant")]
    #[serde(rename = "auth0_tenant")]
    Tenant,
    #[strum(serialize = "auth0_role")]
    #[serde(rename = "auth0_role")]
    Role,
    #[strum(serialize = "auth0_log_stream")]
    #[serde(rename = "auth0_log_stream")]
    LogStream,
    #[strum(serialize = "auth0_branding")]
    #[serde(rename = "auth0_branding")]
    Branding,
    #[strum(serialize = "auth0_guardian")]
    #[serde(rename = "auth0_guardian")]
    Guardian,
    #[strum(serialize = "auth0_action")]
    #[serde(rename = "auth0_action")]
    Action,
    #[strum(serialize = "auth0_flow")]
    #[serde(rename = "auth0_flow")]
    Flow
}

impl ResourceKind {
    /// Terraform type name, e.g. `auth0_client`.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Client => "auth0_client",
            Self::ClientGrant => "auth0_client_grant",
            Self::Connection => "auth0_connection",
            Self::CustomDomain => "auth0_custom_domain",
            Self::ResourceServer => "auth0_resource_server",
            Self::Rule => "auth0_rule",
            Self::RuleConfig => "auth0_rule_config",
            Self::Hook => "auth0_hook",
            Self::Prompt => "auth0_prompt",
            Self::Email => "auth0_email",
            Self::EmailTemplate => "auth0_email_template",
            Self::User => "auth0_user",
            Self::Tenant => "auth0_tenant",
            Self::Role => "auth0_role",
            Self::LogStream => "auth0_log_stream",
            Self::Branding => "auth0_branding",
            Self::Guardian => "auth0_guardian",
            Self::Action => "auth0_action",
            Self::Flow => "auth0_flow"
        }
    }

    /// Management API collection the resource is backed by.
    pub fn api_path(self) -> &'static str {
        match self {
            Self::Client => "/clients",
            Self::ClientGrant => "/client-grants",
            Self::Connection => "/connections",
            Self::CustomDomain => "/custom-domains",
            Self::ResourceServer => "/resource-servers",
            Self::Rule => "/rules",
            Self::RuleConfig => "/rules-configs",
            Self::Hook => "/hooks",
            Self::Prompt => "/prompts",
            Self::Email => "/emails/provider",
            Self::EmailTemplate => "/email-templates",
            Self::User => "/users",
            Self::Tenant => "/tenants/settings",
            Self::Role => "/roles",
            Self::LogStream => "/log-streams",
            Self::Branding => "/branding",
            Self::Guardian => "/guardian/factors",
            Self::Action => "/actions/actions",
            Self::Flow => "/actions/triggers"
        }
    }

    /// Singleton resources manage tenant-wide settings rather than a
    /// collection of objects.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            Self::Prompt | Self::Email | Self::Tenant | Self::Branding | Self::Guardian
        )
    }

    pub fn all() -> impl Iterator<Item = ResourceKind> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_nineteen_resources() {
        assert_eq!(ResourceKind::COUNT, 19);
        assert_eq!(ResourceKind::all().count(), 19);
    }

    #[test]
    fn test_type_name_matches_strum() {
        for kind in ResourceKind::all() {
            assert_eq!(kind.type_name(), kind.as_ref());
            assert_eq!(kind.to_string(), kind.type_name());
            assert_eq!(ResourceKind::from_str(kind.type_name()).unwrap(), kind);
            assert!(kind.type_name().starts_with("auth0_"));
        }
    }

    #[test]
    fn test_type_names_unique() {
        let names: HashSet<_> = ResourceKind::all().map(ResourceKind::type_name).collect();
        assert_eq!(names.len(), ResourceKind::COUNT);
    }

    #[test]
    fn test_serde_uses_type_name() {
        let json = serde_json::to_string(&ResourceKind::LogStream).unwrap();
        assert_eq!(json, "\"auth0_log_stream\"");
    }

    #[test]
    fn test_unknown_type_name() {
        assert!(ResourceKind::from_str("auth0_organization").is_err());
    }

    #[test]
    fn test_singletons() {
        assert!(ResourceKind::Tenant.is_singleton());
        assert!(!ResourceKind::Client.is_singleton());
    }
}
