//! Terminal and file input helpers.

use scrivener_error::{InputError, InputErrorKind, ScrivenerResult};
use scrivener_interface::Console;
use std::path::Path;
use tracing::{debug, instrument};

/// Line that ends a pasted snippet.
pub const SNIPPET_SENTINEL: &str = "END";

/// Answer that ends the story loop.
pub const QUIT_SENTINEL: &str = "quit";

/// Reads raw lines until one is exactly [`SNIPPET_SENTINEL`] (or input ends)
/// and joins the earlier lines with `\n`.
///
/// Lines are kept untrimmed so indentation survives.
pub async fn collect_snippet<C>(console: &mut C) -> ScrivenerResult<String>
where
    C: Console + ?Sized,
{
    let mut lines = Vec::new();
    while let Some(line) = console.read_line().await? {
        let line = line.trim_end_matches('\r');
        if line == SNIPPET_SENTINEL {
            break;
        }
        lines.push(line.to_string());
    }
    debug!(lines = lines.len(), "Collected snippet");
    Ok(lines.join("\n"))
}

/// Asks a yes/no question. Only an explicit `yes` (any case) counts.
pub async fn confirm<C>(console: &mut C, question: &str) -> ScrivenerResult<bool>
where
    C: Console + ?Sized,
{
    let answer = console.prompt(&format!("{question} (yes/no): ")).await?;
    Ok(answer.eq_ignore_ascii_case("yes"))
}

/// Reads a source file as UTF-8 text.
///
/// # Errors
///
/// Returns [`InputErrorKind::FileRead`] for missing, unreadable, or non-UTF-8
/// files.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn read_source_file(path: &Path) -> ScrivenerResult<String> {
    let code = tokio::fs::read_to_string(path).await.map_err(|e| {
        InputError::new(InputErrorKind::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    debug!(bytes = code.len(), "Read source file");
    Ok(code)
}
