//! Configuration layering failure.

/// Layering or deserializing `scrivener.toml` sources failed.
///
/// Raised for an unreadable `--config` file, malformed TOML, or an unknown
/// key in any layer.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration layering failed: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What the `config` crate reported
    pub message: String,
    /// Line of the call site
    pub line: u32,
    /// File of the call site
    pub file: &'static str,
}

impl ConfigError {
    /// Records a configuration failure at the caller's location.
    ///
    /// ```
    /// use scrivener_error::ConfigError;
    ///
    /// let err = ConfigError::new("unknown field `chapter_count`");
    /// assert!(err.to_string().contains("chapter_count"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
