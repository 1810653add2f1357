use anyhow::Result;
use auth0_provider::ProviderSchema;
use clap::Args;

use crate::output;

#[derive(Args)]
pub struct SchemaArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SchemaArgs) -> Result<()> {
    let schema = ProviderSchema::new();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    output::header("Provider Schema");
    println!();
    for attr in &schema.attributes {
        let mut flags = vec![if attr.required { "required" } else { "optional" }];
        if attr.sensitive {
            flags.push("sensitive");
        }
        println!(
            "  {:<14} {:<7} {:<20} env {}",
            attr.name,
            format!("{:?}", attr.attr_type).to_lowercase(),
            flags.join(", "),
            attr.env_fallback
        );
        println!("  {:<14} {}", "", attr.description);
    }
    Ok(())
}
