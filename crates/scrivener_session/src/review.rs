//! Code review session.

use crate::{collect_snippet, confirm, read_source_file, request};
use scrivener_core::Transcript;
use scrivener_error::{
    InputError, InputErrorKind, ScrivenerError, ScrivenerErrorKind, ScrivenerResult, SessionError,
    SessionErrorKind,
};
use scrivener_interface::{CompletionDriver, Console};
use scrivener_prompt::{Language, PromptBuilder, ReviewParameters};
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

const SNIPPET_NAME: &str = "snippet";

/// Steps after the initial analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReviewStep {
    /// Code analysis
    #[display("analysis")]
    Analysis,
    /// Refactoring suggestions
    #[display("refactor")]
    Refactor,
    /// Documentation generation
    #[display("documentation")]
    Documentation,
    /// Writing documentation to disk
    #[display("save")]
    Save,
}

/// How a review session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewEnd {
    /// All requested steps ran
    Completed,
    /// The submitted code was empty; no call was made
    NoInput,
    /// The code could not be read; no call was made
    InputUnavailable(String),
    /// The mode menu answer was not `1` or `2`
    InvalidMode(String),
    /// An optional step failed after the analysis succeeded
    StepFailed {
        /// The step that failed
        step: ReviewStep,
        /// Why it failed
        message: String,
    },
}

/// Result of a review session.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ReviewOutcome {
    /// What was reviewed, once collected
    params: Option<ReviewParameters>,
    /// Analysis, refactor, and documentation texts in generation order
    transcript: Transcript,
    /// Where the documentation was written, if saved
    saved_to: Option<PathBuf>,
    /// Why the session stopped
    end: ReviewEnd,
}

impl ReviewOutcome {
    fn ended(end: ReviewEnd) -> Self {
        Self {
            params: None,
            transcript: Transcript::new(),
            saved_to: None,
            end,
        }
    }
}

/// Interactive code review: analyze, then optionally refactor and document.
///
/// At most three completion calls are made. A failed analysis is returned as
/// an error; a failed optional step is logged, shown to the user, and
/// recorded in [`ReviewEnd::StepFailed`] with the transcript so far.
pub struct ReviewSession<D, C> {
    driver: D,
    console: C,
    prompts: PromptBuilder,
    output_dir: PathBuf,
}

impl<D, C> ReviewSession<D, C>
where
    D: CompletionDriver,
    C: Console,
{
    /// Creates a session that saves documentation under `output_dir`.
    pub fn new(driver: D, console: C, prompts: PromptBuilder, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            console,
            prompts,
            output_dir: output_dir.into(),
        }
    }

    /// The completion driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs the session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the analysis call fails or the terminal fails.
    #[instrument(skip(self), fields(model = self.driver.model_name()))]
    pub async fn run(&mut self) -> ScrivenerResult<ReviewOutcome> {
        self.console.say("=== Scrivener Code Review ===").await?;

        let params = match self.collect_input().await {
            Ok(params) => params,
            Err(e) => match e.kind() {
                ScrivenerErrorKind::Input(input) => {
                    let end = Self::input_end(&input.kind);
                    warn!(error = %input.kind, "Review input rejected");
                    self.console.say(&format!("{}", input.kind)).await?;
                    return Ok(ReviewOutcome::ended(end));
                }
                _ => return Err(e),
            },
        };

        let mut transcript = Transcript::new();

        let analysis = request(&self.driver, &self.prompts.analysis(&params)).await?;
        self.show("Code Analysis", &analysis).await?;
        transcript.push(ReviewStep::Analysis.to_string(), analysis);

        let mut outcome = ReviewOutcome {
            params: None,
            transcript,
            saved_to: None,
            end: ReviewEnd::Completed,
        };

        self.follow_up(&params, &mut outcome).await?;
        outcome.params = Some(params);
        info!(end = ?outcome.end, "Review session finished");
        Ok(outcome)
    }

    fn input_end(kind: &InputErrorKind) -> ReviewEnd {
        match kind {
            InputErrorKind::EmptySubmission => ReviewEnd::NoInput,
            InputErrorKind::InvalidSelection(answer) => ReviewEnd::InvalidMode(answer.clone()),
            other => ReviewEnd::InputUnavailable(other.to_string()),
        }
    }

    async fn collect_input(&mut self) -> ScrivenerResult<ReviewParameters> {
        self.console.say("1. Review a code file").await?;
        self.console.say("2. Paste a code snippet").await?;
        let mode = self.console.prompt("Choose an option (1 or 2): ").await?;

        let params = match mode.as_str() {
            "1" => {
                let path = self.console.prompt("Path to the code file: ").await?;
                let path = PathBuf::from(path);
                let code = read_source_file(&path).await?;
                let params = ReviewParameters::from_file(path, code);
                if params.language().is_generic() {
                    warn!(file = %params.filename(), "Unrecognized extension; using generic language label");
                    self.console
                        .say(&format!(
                            "Warning: unrecognized file extension for '{}'; reviewing it as generic {}.",
                            params.filename(),
                            Language::Generic
                        ))
                        .await?;
                }
                params
            }
            "2" => {
                self.console
                    .say("Paste your code below. Type END on its own line when finished.")
                    .await?;
                let code = collect_snippet(&mut self.console).await?;
                ReviewParameters::from_snippet(SNIPPET_NAME, Language::Generic, code)
            }
            other => {
                return Err(InputError::new(InputErrorKind::InvalidSelection(other.to_string())).into());
            }
        };

        if params.code().trim().is_empty() {
            return Err(InputError::new(InputErrorKind::EmptySubmission).into());
        }
        Ok(params)
    }

    // Records a failed optional step in `outcome.end`; errors are terminal failures.
    async fn follow_up(
        &mut self,
        params: &ReviewParameters,
        outcome: &mut ReviewOutcome,
    ) -> ScrivenerResult<()> {
        if confirm(&mut self.console, "Would you like refactoring suggestions?").await? {
            let analysis = outcome
                .transcript
                .find(&ReviewStep::Analysis.to_string())
                .map(|entry| entry.text().clone())
                .unwrap_or_default();
            let prompt = self.prompts.refactor(params, &analysis);
            match request(&self.driver, &prompt).await {
                Ok(text) => {
                    self.show("Refactoring Suggestions", &text).await?;
                    outcome.transcript.push(ReviewStep::Refactor.to_string(), text);
                }
                Err(e) => {
                    outcome.end = self.step_failed(ReviewStep::Refactor, &e).await?;
                    return Ok(());
                }
            }
        }

        if !confirm(&mut self.console, "Would you like documentation for this code?").await? {
            return Ok(());
        }

        let documentation = match request(&self.driver, &self.prompts.documentation(params)).await {
            Ok(text) => text,
            Err(e) => {
                outcome.end = self.step_failed(ReviewStep::Documentation, &e).await?;
                return Ok(());
            }
        };
        self.show("Documentation", &documentation).await?;
        outcome
            .transcript
            .push(ReviewStep::Documentation.to_string(), documentation.clone());

        let path = self.output_dir.join(params.documentation_file_name());
        let question = format!("Save the documentation to {}?", path.display());
        if confirm(&mut self.console, &question).await? {
            match save_documentation(&path, &documentation).await {
                Ok(()) => {
                    self.console
                        .say(&format!("Documentation saved to {}", path.display()))
                        .await?;
                    outcome.saved_to = Some(path);
                }
                Err(e) => outcome.end = self.step_failed(ReviewStep::Save, &e).await?,
            }
        }

        Ok(())
    }

    async fn step_failed(&mut self, step: ReviewStep, err: &ScrivenerError) -> ScrivenerResult<ReviewEnd> {
        let message = err.to_string();
        error!(%step, error = %message, "Review step failed");
        self.console
            .say(&format!("The {step} step failed: {message}"))
            .await?;
        Ok(ReviewEnd::StepFailed { step, message })
    }

    async fn show(&mut self, title: &str, text: &str) -> ScrivenerResult<()> {
        self.console.say(&format!("\n=== {title} ===\n")).await?;
        self.console.say(text).await
    }
}

async fn save_documentation(path: &Path, documentation: &str) -> ScrivenerResult<()> {
    tokio::fs::write(path, documentation).await.map_err(|e| {
        SessionError::new(SessionErrorKind::OutputWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(())
}
