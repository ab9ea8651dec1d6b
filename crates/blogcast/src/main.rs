//! Blogcast CLI binary.
//!
//! - Turn a blog post into a narrated podcast
//! - List the models available for narration

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_models, run_generate};

    // Keys may live in a local .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => Ok(run_generate(args, cli.verbose).await?),
        Commands::Models { config } => {
            list_models(config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
