//! Session loop errors.

/// Specific error conditions raised by a session loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SessionErrorKind {
    /// An optional step failed after earlier steps succeeded
    #[display("Step '{}' failed: {}", step, message)]
    StepFailed {
        /// Name of the failed step
        step: String,
        /// Description of the failure
        message: String,
    },
    /// Generated output could not be written
    #[display("Failed to write '{}': {}", path, message)]
    OutputWrite {
        /// Destination path
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// Session error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
