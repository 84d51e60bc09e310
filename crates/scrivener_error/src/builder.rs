//! Request builder validation errors.

/// Why a `derive_builder` request builder refused to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BuilderErrorKind {
    /// A required field was never set
    #[display("field `{}` was not set", _0)]
    MissingField(String),

    /// A custom validation rejected the value
    #[display("{}", _0)]
    ValidationFailed(String),
}

/// A completion or wire request could not be assembled.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request could not be built: {} ({}:{})", kind, file, line)]
pub struct BuilderError {
    kind: BuilderErrorKind,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Records a builder failure at the caller's location.
    #[track_caller]
    pub fn new(kind: BuilderErrorKind) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            kind,
            line: caller.line(),
            file: caller.file(),
        }
    }

    /// Why the build failed.
    pub fn kind(&self) -> &BuilderErrorKind {
        &self.kind
    }
}

/// Validation messages from generated builders.
impl From<String> for BuilderError {
    #[track_caller]
    fn from(msg: String) -> Self {
        Self::new(BuilderErrorKind::ValidationFailed(msg))
    }
}
