//! Story command handler.

use scrivener_config::ScrivenerConfig;
use scrivener_error::ScrivenerResult;
use scrivener_models::OpenAICompatibleClient;
use scrivener_prompt::PromptBuilder;
use scrivener_session::{StoryEnd, StorySession, TerminalConsole};

/// Runs one story session against the configured endpoint.
pub async fn run_story(config: &ScrivenerConfig) -> ScrivenerResult<()> {
    let driver = OpenAICompatibleClient::from_config(config.client())?;
    let prompts = PromptBuilder::new(config.prompts().clone());
    let mut session = StorySession::new(
        driver,
        TerminalConsole::new(),
        prompts,
        *config.story().chapters(),
    );

    let outcome = session.run().await?;

    match outcome.end() {
        StoryEnd::Quit { round } => println!(
            "\nYou left the story at round {round} after {} chapter(s).",
            outcome.transcript().len()
        ),
        StoryEnd::Finished => println!(
            "\nThe End. {} chapters written.",
            outcome.transcript().len()
        ),
    }
    Ok(())
}
