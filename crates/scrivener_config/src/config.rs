//! Configuration structures.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use scrivener_error::{ConfigError, ScrivenerError, ScrivenerResult};
use scrivener_prompt::PromptSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../scrivener.toml");

/// Completion endpoint settings.
///
/// ```toml
/// [client]
/// base_url = "https://router.huggingface.co/v1"
/// model = "meta-llama/Llama-3.1-8B-Instruct"
/// api_key_env = "HF_TOKEN"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of an OpenAI-compatible API; `/chat/completions` is appended
    base_url: String,
    /// Model identifier sent with every request
    model: String,
    /// Name of the environment variable holding the API key
    api_key_env: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/v1".to_string(),
            model: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
            api_key_env: "HF_TOKEN".to_string(),
        }
    }
}

impl ClientConfig {
    /// Replaces the model identifier.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }
}

/// Story session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default, deny_unknown_fields)]
pub struct StoryConfig {
    /// Continuation rounds after the opening chapter
    chapters: u32,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self { chapters: 5 }
    }
}

/// Review session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewConfig {
    /// Directory where generated documentation is written
    output_dir: PathBuf,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Top-level Scrivener configuration.
///
/// # Example
///
/// ```no_run
/// use scrivener_config::ScrivenerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScrivenerConfig::load()?;
/// println!("Model: {}", config.client().model());
/// println!("Chapters: {}", config.story().chapters());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, PartialEq, Default, Deserialize, Serialize, derive_getters::Getters,
)]
#[serde(default, deny_unknown_fields)]
pub struct ScrivenerConfig {
    /// Completion endpoint
    client: ClientConfig,
    /// Per-operation generation parameters
    prompts: PromptSettings,
    /// Story session
    story: StoryConfig,
    /// Review session
    review: ReviewConfig,
}

impl ScrivenerConfig {
    /// Mutable access to the client settings, for command-line overrides.
    pub fn client_mut(&mut self) -> &mut ClientConfig {
        &mut self.client
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ScrivenerResult<Self> {
        Self::build(Self::defaults_builder())
    }

    /// Bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScrivenerResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::defaults_builder().add_source(File::from(path.as_ref()));
        Self::build(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file fails to parse.
    #[instrument]
    pub fn load() -> ScrivenerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::defaults_builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scrivener/scrivener.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scrivener").required(false));

        Self::build(builder)
    }

    fn defaults_builder() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> ScrivenerResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
