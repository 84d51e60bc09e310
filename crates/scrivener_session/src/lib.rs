//! Interactive sessions for the Scrivener prompt tools.
//!
//! Each session is a linear pipeline of typed steps (collect, render, call,
//! display) that owns its transcript and threads it explicitly from step to
//! step. Exactly one completion call is in flight at any time, and terminal
//! reads never overlap with network calls.
//!
//! - [`ReviewSession`]: analyze code, then optionally refactor and document it
//! - [`StorySession`]: an opening chapter followed by a bounded choice loop

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collector;
mod review;
mod story;
mod terminal;

pub use collector::{QUIT_SENTINEL, SNIPPET_SENTINEL, collect_snippet, confirm, read_source_file};
pub use review::{ReviewEnd, ReviewOutcome, ReviewSession, ReviewStep};
pub use story::{StoryEnd, StoryOutcome, StorySession, StoryState};
pub use terminal::TerminalConsole;

use scrivener_error::ScrivenerResult;
use scrivener_interface::CompletionDriver;
use scrivener_prompt::RenderedPrompt;
use tracing::info;

/// Sends a rendered prompt and returns the first choice's text.
async fn request<D>(driver: &D, prompt: &RenderedPrompt) -> ScrivenerResult<String>
where
    D: CompletionDriver + ?Sized,
{
    info!(
        operation = %prompt.operation(),
        model = driver.model_name(),
        "Requesting completion"
    );
    driver
        .complete(
            prompt.system(),
            prompt.user(),
            *prompt.params().temperature(),
            *prompt.params().max_tokens(),
        )
        .await
}
