//! Check command - configuration and connectivity diagnostics
//!
//! Runs the same configure step the host runtime would:
//! - Resolves settings from flags, the environment and an optional file
//! - Builds the Management API client
//! - With `--verify`, performs the client-credentials exchange

use std::path::PathBuf;

use anyhow::Result;
use auth0_provider::{Diagnostic, new_provider};
use clap::Args;
use config::{ExplicitSource, FileSource, Resolver, Setting};
use serde_json::json;

use super::DEFAULT_TERRAFORM_VERSION;
use crate::{output, ux_error};

#[derive(Args)]
pub struct CheckArgs {
    /// Auth0 tenant domain
    #[arg(long)]
    pub domain: Option<String>,

    /// Machine-to-machine client ID
    #[arg(long)]
    pub client_id: Option<String>,

    /// Machine-to-machine client secret
    #[arg(long)]
    pub client_secret: Option<String>,

    /// Enable debug logging of Management API traffic
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub debug: Option<bool>,

    /// TOML or YAML file consulted after the environment
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Terraform version reported in the identification string
    #[arg(long, default_value = DEFAULT_TERRAFORM_VERSION)]
    pub terraform_version: String,

    /// Request an access token to confirm the credentials work
    #[arg(long)]
    pub verify: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    fn explicit(&self) -> ExplicitSource {
        let mut explicit = ExplicitSource::new();
        if let Some(domain) = &self.domain {
            explicit.set(Setting::Domain, domain.as_str());
        }
        if let Some(client_id) = &self.client_id {
            explicit.set(Setting::ClientId, client_id.as_str());
        }
        if let Some(secret) = &self.client_secret {
            explicit.set(Setting::ClientSecret, secret.as_str());
        }
        if let Some(debug) = self.debug {
            explicit.set(Setting::Debug, debug);
        }
        explicit
    }

    fn resolver(&self) -> Result<Resolver> {
        let mut resolver = Resolver::standard(self.explicit());
        if let Some(path) = &self.config_file {
            resolver = resolver.with_source(FileSource::load(path)?);
        }
        Ok(resolver)
    }
}

pub async fn run(args: CheckArgs) -> Result<()> {
    let resolver = args.resolver()?;
    let provider = new_provider();

    let meta = match provider.configure_with(&resolver, &args.terraform_version) {
        Ok(meta) => meta,
        Err(e) => {
            let diagnostic = Diagnostic::from(&e);
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "configured": false,
                        "diagnostics": [diagnostic],
                    }))?
                );
            } else {
                ux_error::from_diagnostic(&diagnostic).display();
            }
            std::process::exit(1);
        }
    };

    let verified = if args.verify {
        match meta.access_token().await {
            Ok(_) => Some(true),
            Err(e) => {
                if args.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "configured": true,
                            "verified": false,
                            "error": e.to_string(),
                        }))?
                    );
                } else {
                    ux_error::token_request_failed(&e).display();
                }
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if args.json {
        let output = json!({
            "configured": true,
            "domain": meta.base_url().as_str(),
            "api_url": meta.api_url().as_str(),
            "client_id": meta.client_id(),
            "debug": meta.debug(),
            "user_agent": meta.user_agent(),
            "terraform_version": provider.terraform_version(),
            "sources": resolver.source_names(),
            "verified": verified,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    output::header("Auth0 Provider Configuration");
    println!();
    output::field("Domain", meta.base_url().as_str());
    output::field("Client ID", meta.client_id());
    output::field("Debug", if meta.debug() { "on" } else { "off" });
    output::field("User-Agent", meta.user_agent());
    output::field("Sources", &resolver.source_names().join(" > "));
    println!();

    match verified {
        Some(_) => output::success("Credentials accepted by the tenant"),
        None => {
            output::success("Configuration resolved");
            output::hint("run with --verify to request an access token");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use config::{ConfigSource, RawValue};

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CheckArgs,
    }

    fn parse(argv: &[&str]) -> CheckArgs {
        let mut full = vec!["check"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn test_flags_become_explicit_values() {
        let args = parse(&["--domain", "tenant.auth0.com", "--debug"]);
        let explicit = args.explicit();

        assert_eq!(
            explicit.lookup(Setting::Domain),
            Some(RawValue::Str("tenant.auth0.com".to_string()))
        );
        assert_eq!(explicit.lookup(Setting::Debug), Some(RawValue::Bool(true)));
        assert_eq!(explicit.lookup(Setting::ClientId), None);
    }

    #[test]
    fn test_debug_accepts_explicit_false() {
        let args = parse(&["--debug", "false"]);
        assert_eq!(args.debug, Some(false));
    }

    #[test]
    fn test_config_file_appended_last() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth0.toml");
        std::fs::write(&path, "domain = \"file.auth0.com\"\n").unwrap();

        let args = parse(&["--config-file", path.to_str().unwrap()]);
        let resolver = args.resolver().unwrap();
        let names = resolver.source_names();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "explicit");
        assert_eq!(names[1], "env");
        assert!(names[2].starts_with("file:"));
    }

    #[test]
    fn test_missing_config_file_errors() {
        let args = parse(&["--config-file", "/nonexistent/auth0.toml"]);
        assert!(args.resolver().is_err());
    }
}
