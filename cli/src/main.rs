use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;
pub mod ux_error;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.wants_debug() {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Check(args) => commands::check::run(args).await,
        Commands::Schema(args) => commands::schema::run(args),
        Commands::Resources(args) => commands::resources::run(args),
        Commands::UserAgent(args) => commands::user_agent::run(args),
        Commands::Completion(args) => commands::completion::run(args),
    }
}
