//! Terminal and file input errors.

/// Specific error conditions while collecting user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InputErrorKind {
    /// Source file could not be read
    #[display("Failed to read '{}': {}", path, message)]
    FileRead {
        /// Path the user supplied
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Code submission was empty after trimming
    #[display("No code was provided")]
    EmptySubmission,
    /// Standard input reached end of file while a line was expected
    #[display("Input closed before an answer was given")]
    Closed,
    /// Reading or writing the terminal failed
    #[display("Terminal I/O failed: {}", _0)]
    Stdin(String),
    /// Menu selection outside the offered options
    #[display("Invalid selection: {}", _0)]
    InvalidSelection(String),
}

/// Input error with location tracking.
///
/// # Examples
///
/// ```
/// use scrivener_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::EmptySubmission);
/// assert_eq!(err.kind, InputErrorKind::EmptySubmission);
/// assert!(format!("{}", err).contains("No code"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The specific error condition
    pub kind: InputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
