//! Layered configuration for the Scrivener prompt tools.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from scrivener.toml)
//! - `~/.config/scrivener/scrivener.toml`
//! - `./scrivener.toml`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{ClientConfig, ReviewConfig, ScrivenerConfig, StoryConfig};
