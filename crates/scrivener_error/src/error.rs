//! Top-level error wrapper types.

use crate::{
    BuilderError, CompletionError, ConfigError, HttpError, InputError, SessionError,
};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use scrivener_error::{CompletionError, CompletionErrorKind, ScrivenerError, ScrivenerErrorKind};
///
/// let err: ScrivenerError = CompletionError::new(CompletionErrorKind::Api {
///     status: 401,
///     message: "bad key".to_string(),
/// })
/// .into();
/// assert!(matches!(err.kind(), ScrivenerErrorKind::Completion(_)));
/// assert!(err.to_string().contains("API error 401: bad key"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivenerErrorKind {
    /// HTTP client could not be built
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Terminal or file input error
    #[from(InputError)]
    Input(InputError),
    /// Remote completion error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Session loop error
    #[from(SessionError)]
    Session(SessionError),
}

/// Scrivener error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ConfigError, ScrivenerResult};
///
/// fn load(chapters: i64) -> ScrivenerResult<u32> {
///     u32::try_from(chapters)
///         .map_err(|_| ConfigError::new("story.chapters must not be negative").into())
/// }
///
/// assert_eq!(load(5).unwrap(), 5);
/// assert!(!load(-1).unwrap_err().is_completion());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivener Error: {}", _0)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }

    /// True when the error came from the remote completion service.
    pub fn is_completion(&self) -> bool {
        matches!(self.kind(), ScrivenerErrorKind::Completion(_))
    }

    /// True when the error came from user input rather than the network.
    pub fn is_input(&self) -> bool {
        matches!(self.kind(), ScrivenerErrorKind::Input(_))
    }
}

// Generic From implementation for any type that converts to ScrivenerErrorKind
impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
///
/// # Examples
///
/// ```
/// use scrivener_error::{InputError, InputErrorKind, ScrivenerResult};
///
/// fn require_code(code: &str) -> ScrivenerResult<&str> {
///     if code.trim().is_empty() {
///         return Err(InputError::new(InputErrorKind::EmptySubmission).into());
///     }
///     Ok(code)
/// }
///
/// assert!(require_code("  ").unwrap_err().is_input());
/// ```
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;
