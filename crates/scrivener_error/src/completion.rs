//! Remote completion errors.

/// Failure conditions reported by a completion driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Transport-level failure (connection, TLS, body read)
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Service answered with a non-success status or an error object
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },

    /// Response body did not contain a usable first choice
    #[display("Unexpected response: {}", _0)]
    UnexpectedResponse(String),
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::UnexpectedResponse(
///     "no choices returned".to_string(),
/// ));
/// assert!(format!("{}", err).contains("no choices"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at {}:{}", kind, file, line)]
pub struct CompletionError {
    /// The specific error kind
    pub kind: CompletionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new completion error.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
