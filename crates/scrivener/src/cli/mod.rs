//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scrivener binary.

mod commands;
mod review;
mod story;

pub use commands::{Cli, Commands};
pub use review::run_review;
pub use story::run_story;

use scrivener_config::ScrivenerConfig;
use scrivener_error::ScrivenerResult;
use std::path::Path;
use tracing::info;

/// Loads configuration and applies command-line overrides.
///
/// An explicit path replaces the home and working-directory files.
pub fn load_config(path: Option<&Path>, model: Option<&str>) -> ScrivenerResult<ScrivenerConfig> {
    let mut config = match path {
        Some(path) => ScrivenerConfig::from_file(path)?,
        None => ScrivenerConfig::load()?,
    };
    if let Some(model) = model {
        config.client_mut().set_model(model);
    }
    info!(
        model = config.client().model(),
        base_url = config.client().base_url(),
        "Configuration loaded"
    );
    Ok(config)
}
