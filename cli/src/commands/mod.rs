pub mod check;
pub mod completion;
pub mod resources;
pub mod schema;
pub mod user_agent;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "terraform-provider-auth0",
    author,
    version,
    about = "Auth0 Terraform provider",
    long_about = "Diagnostics for the Auth0 Terraform provider.\n\nSettings are read from flags, \
                  then AUTH0_DOMAIN, AUTH0_CLIENT_ID, AUTH0_CLIENT_SECRET and AUTH0_DEBUG, \
                  then an optional config file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether logging should be raised to debug before the command runs.
    pub fn wants_debug(&self) -> bool {
        let env_debug = std::env::var("AUTH0_DEBUG")
            .map(|v| config::parse_debug_flag(&v))
            .unwrap_or(false);
        match &self.command {
            Commands::Check(args) => args.debug.unwrap_or(env_debug),
            _ => false,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Resolve provider configuration and build the management client")]
    Check(check::CheckArgs),

    #[command(about = "Print the provider configuration schema")]
    Schema(schema::SchemaArgs),

    #[command(about = "List the resource types registered by the provider")]
    Resources(resources::ResourcesArgs),

    #[command(about = "Print the identification string sent to Auth0")]
    UserAgent(user_agent::UserAgentArgs),

    #[command(about = "Generate shell completions")]
    Completion(completion::CompletionArgs),
}

/// Terraform version assumed when none is given.
pub const DEFAULT_TERRAFORM_VERSION: &str = "unknown";
