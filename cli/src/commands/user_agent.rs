use anyhow::Result;
use auth0_provider::{IdentityString, PluginSdkMetadata};
use clap::Args;

use super::DEFAULT_TERRAFORM_VERSION;

#[derive(Args)]
pub struct UserAgentArgs {
    /// Terraform version to embed
    #[arg(long, default_value = DEFAULT_TERRAFORM_VERSION)]
    pub terraform_version: String,

    /// Output the individual version tokens as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: UserAgentArgs) -> Result<()> {
    let identity = IdentityString::current(&PluginSdkMetadata, &args.terraform_version);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
    } else {
        println!("{identity}");
    }
    Ok(())
}
