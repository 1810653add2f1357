use anyhow::Result;
use auth0_provider::new_provider;
use clap::Args;
use serde_json::json;

use crate::output;

#[derive(Args)]
pub struct ResourcesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ResourcesArgs) -> Result<()> {
    let provider = new_provider();

    if args.json {
        let resources: Vec<_> = provider
            .resources()
            .map(|kind| {
                json!({
                    "type": kind.type_name(),
                    "api_path": kind.api_path(),
                    "singleton": kind.is_singleton(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&resources)?);
        return Ok(());
    }

    output::header("Registered Resources");
    println!();
    for kind in provider.resources() {
        let marker = if kind.is_singleton() { " (singleton)" } else { "" };
        println!("  {:<24} {}{}", kind.type_name(), kind.api_path(), marker);
    }
    Ok(())
}
