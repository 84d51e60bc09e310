//! Code review command handler.

use scrivener_config::ScrivenerConfig;
use scrivener_error::{ScrivenerResult, SessionError, SessionErrorKind};
use scrivener_models::OpenAICompatibleClient;
use scrivener_prompt::PromptBuilder;
use scrivener_session::{ReviewEnd, ReviewSession, TerminalConsole};

/// Runs one review session against the configured endpoint.
///
/// Rejected input is not an error. A failed optional step is.
pub async fn run_review(config: &ScrivenerConfig) -> ScrivenerResult<()> {
    let driver = OpenAICompatibleClient::from_config(config.client())?;
    let prompts = PromptBuilder::new(config.prompts().clone());
    let mut session = ReviewSession::new(
        driver,
        TerminalConsole::new(),
        prompts,
        config.review().output_dir(),
    );

    let outcome = session.run().await?;

    match outcome.end() {
        ReviewEnd::Completed => match outcome.saved_to() {
            Some(path) => println!("\nReview complete. Documentation at {}.", path.display()),
            None => println!("\nReview complete."),
        },
        ReviewEnd::NoInput | ReviewEnd::InputUnavailable(_) | ReviewEnd::InvalidMode(_) => {
            println!("\nNothing was reviewed.");
        }
        ReviewEnd::StepFailed { step, message } => {
            return Err(SessionError::new(SessionErrorKind::StepFailed {
                step: step.to_string(),
                message: message.clone(),
            })
            .into());
        }
    }
    Ok(())
}
