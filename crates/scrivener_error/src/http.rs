//! HTTP client construction failure.

/// The HTTP client could not be built, so no request was ever sent.
///
/// Failures of an individual request are [`crate::CompletionErrorKind::Http`].
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP client could not be built: {} ({}:{})", message, file, line)]
pub struct HttpError {
    /// What the client builder reported
    pub message: String,
    /// Line of the call site
    pub line: u32,
    /// File of the call site
    pub file: &'static str,
}

impl HttpError {
    /// Records a client construction failure at the caller's location.
    ///
    /// ```
    /// use scrivener_error::HttpError;
    ///
    /// let err = HttpError::new("TLS backend unavailable");
    /// assert!(err.to_string().starts_with("HTTP client could not be built: TLS"));
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
