//! Error types for the Scrivener workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scrivener_error::{InputError, InputErrorKind, ScrivenerResult};
//!
//! fn read_answer(line: Option<&str>) -> ScrivenerResult<String> {
//!     let line = line.ok_or_else(|| InputError::new(InputErrorKind::Closed))?;
//!     Ok(line.trim().to_string())
//! }
//!
//! assert_eq!(read_answer(Some(" yes ")).unwrap(), "yes");
//! assert!(read_answer(None).unwrap_err().is_input());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod completion;
mod config;
mod error;
mod http;
mod input;
mod session;

pub use builder::{BuilderError, BuilderErrorKind};
pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{ScrivenerError, ScrivenerErrorKind, ScrivenerResult};
pub use http::HttpError;
pub use input::{InputError, InputErrorKind};
pub use session::{SessionError, SessionErrorKind};
