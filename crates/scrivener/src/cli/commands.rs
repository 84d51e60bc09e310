//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrivener - interactive code review and storytelling with an LLM
#[derive(Parser, Debug)]
#[command(name = "scrivener")]
#[command(about = "Interactive code review and storytelling with an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model identifier, overriding the configured one
    #[arg(long, global = true)]
    pub model: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review a code file or pasted snippet
    Review,

    /// Write an interactive story
    Story,
}
