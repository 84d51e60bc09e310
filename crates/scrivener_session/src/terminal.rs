//! Standard input/output console.

use async_trait::async_trait;
use scrivener_error::{InputError, InputErrorKind, ScrivenerResult};
use scrivener_interface::Console;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// Console backed by the process's stdin and stdout.
pub struct TerminalConsole {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl TerminalConsole {
    /// Attaches to the process's standard streams.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn stdio_error(e: std::io::Error) -> InputError {
    InputError::new(InputErrorKind::Stdin(e.to_string()))
}

#[async_trait]
impl Console for TerminalConsole {
    async fn read_line(&mut self) -> ScrivenerResult<Option<String>> {
        Ok(self.lines.next_line().await.map_err(stdio_error)?)
    }

    async fn write(&mut self, text: &str) -> ScrivenerResult<()> {
        self.stdout
            .write_all(text.as_bytes())
            .await
            .map_err(stdio_error)?;
        self.stdout.flush().await.map_err(stdio_error)?;
        Ok(())
    }
}
