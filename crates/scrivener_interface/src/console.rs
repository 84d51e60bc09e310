//! Line-oriented terminal abstraction.

use async_trait::async_trait;
use scrivener_error::{InputError, InputErrorKind, ScrivenerResult};

/// Line-oriented terminal used by the interactive sessions.
///
/// Implementations block the session until a line is available; there is no
/// timeout.
#[async_trait]
pub trait Console: Send {
    /// Read one raw line without its terminator. `None` means end of input.
    async fn read_line(&mut self) -> ScrivenerResult<Option<String>>;

    /// Write text exactly as given.
    async fn write(&mut self, text: &str) -> ScrivenerResult<()>;

    /// Write text followed by a newline.
    async fn say(&mut self, text: &str) -> ScrivenerResult<()> {
        self.write(&format!("{text}\n")).await
    }

    /// Print `question`, then return the next line trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`InputErrorKind::Closed`] if input ends first.
    async fn prompt(&mut self, question: &str) -> ScrivenerResult<String> {
        self.write(question).await?;
        match self.read_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(InputError::new(InputErrorKind::Closed).into()),
        }
    }
}
