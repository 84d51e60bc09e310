//! Scrivener CLI binary.
//!
//! Two interactive tools backed by an OpenAI-compatible chat endpoint:
//! - `scrivener review`: analyze, refactor, and document a code file or snippet
//! - `scrivener story`: write a branching story one chapter at a time

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, load_config, run_review, run_story};

    // Parse command-line arguments
    let cli = Cli::parse();

    // API keys may live in .env
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the session on stdout
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = load_config(cli.config.as_deref(), cli.model.as_deref())?;

    // Execute the requested command
    let result = match cli.command {
        Commands::Review => run_review(&config).await,
        Commands::Story => run_story(&config).await,
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Session failed");
    }
    result?;

    Ok(())
}
