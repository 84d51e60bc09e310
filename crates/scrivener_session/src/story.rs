//! Interactive story session.

use crate::{QUIT_SENTINEL, request};
use scrivener_core::Transcript;
use scrivener_error::ScrivenerResult;
use scrivener_interface::{CompletionDriver, Console};
use scrivener_prompt::{Genre, PromptBuilder, StoryParameters, parse_choices, resolve_selection};
use tracing::{debug, info, instrument};

/// Why the story stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryEnd {
    /// The reader typed `quit` at this round (1-based)
    Quit {
        /// Round at which the reader quit
        round: u32,
    },
    /// Every continuation round was written
    Finished,
}

/// States of the story loop.
///
/// `AwaitingChoice` moves to `Done` on `quit` and to `GeneratingContinuation`
/// otherwise. `GeneratingContinuation` returns to `AwaitingChoice` until the
/// round limit is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryState {
    /// Showing the genre menu
    AwaitingGenre,
    /// Asking for character, setting, and theme
    AwaitingCharacterInfo {
        /// Selected genre
        genre: Genre,
    },
    /// Writing chapter one
    GeneratingOpening {
        /// Story setup
        params: StoryParameters,
    },
    /// Offering choices for the latest chapter
    AwaitingChoice {
        /// Story setup
        params: StoryParameters,
        /// Current round, starting at 1
        round: u32,
    },
    /// Writing the chapter that follows the reader's choice
    GeneratingContinuation {
        /// Story setup
        params: StoryParameters,
        /// Current round, starting at 1
        round: u32,
        /// The action the reader picked
        choice: String,
    },
    /// Terminal state
    Done {
        /// Story setup
        params: StoryParameters,
        /// Why the loop stopped
        end: StoryEnd,
    },
}

/// Result of a story session.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct StoryOutcome {
    /// Story setup
    params: StoryParameters,
    /// Every chapter in order, opening first
    transcript: Transcript,
    /// Why the loop stopped
    end: StoryEnd,
}

impl StoryOutcome {
    /// Chapters written after the opening.
    pub fn continuations(&self) -> usize {
        self.transcript.len().saturating_sub(1)
    }
}

/// Interactive story: an opening chapter, then up to `rounds` rounds of
/// choices and continuations.
///
/// Without `quit` the session makes exactly `1 + 2 * rounds` completion calls.
/// Any failed call ends the session with an error.
pub struct StorySession<D, C> {
    driver: D,
    console: C,
    prompts: PromptBuilder,
    rounds: u32,
}

impl<D, C> StorySession<D, C>
where
    D: CompletionDriver,
    C: Console,
{
    /// Creates a session with the given number of continuation rounds.
    pub fn new(driver: D, console: C, prompts: PromptBuilder, rounds: u32) -> Self {
        Self {
            driver,
            console,
            prompts,
            rounds,
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

    /// Runs the state machine until `Done`.
    ///
    /// # Errors
    ///
    /// Returns an error if any completion call or terminal read fails.
    #[instrument(skip(self), fields(model = self.driver.model_name(), rounds = self.rounds))]
    pub async fn run(&mut self) -> ScrivenerResult<StoryOutcome> {
        self.console.say("=== Scrivener Interactive Story ===").await?;

        let mut transcript = Transcript::new();
        let mut state = StoryState::AwaitingGenre;
        loop {
            state = match state {
                StoryState::Done { params, end } => {
                    info!(?end, chapters = transcript.len(), "Story session finished");
                    return Ok(StoryOutcome {
                        params,
                        transcript,
                        end,
                    });
                }
                state => self.step(state, &mut transcript).await?,
            };
        }
    }

    /// Advances the loop by one state.
    ///
    /// # Errors
    ///
    /// Returns an error if a completion call or terminal read fails.
    pub async fn step(
        &mut self,
        state: StoryState,
        transcript: &mut Transcript,
    ) -> ScrivenerResult<StoryState> {
        debug!(?state, "Story step");
        let next = match state {
            StoryState::AwaitingGenre => {
                self.console.say("Choose a genre:").await?;
                self.console.say(&Genre::menu()).await?;
                let selection = self.console.prompt("Enter a number (1-8): ").await?;
                let genre = Genre::from_selection(&selection);
                debug!(%selection, %genre, "Genre selected");
                StoryState::AwaitingCharacterInfo { genre }
            }

            StoryState::AwaitingCharacterInfo { genre } => {
                let character = self.console.prompt("Main character's name: ").await?;
                let setting = self.console.prompt("Where does the story take place? ").await?;
                let theme = self.console.prompt("What is the story's theme? ").await?;
                StoryState::GeneratingOpening {
                    params: StoryParameters::new(genre, character, setting, theme),
                }
            }

            StoryState::GeneratingOpening { params } => {
                let text = request(&self.driver, &self.prompts.opening(&params)).await?;
                self.commit_chapter(transcript, 1, text).await?;
                if self.rounds == 0 {
                    StoryState::Done {
                        params,
                        end: StoryEnd::Finished,
                    }
                } else {
                    StoryState::AwaitingChoice { params, round: 1 }
                }
            }

            StoryState::AwaitingChoice { params, round } => {
                let latest = transcript
                    .latest()
                    .map(|entry| entry.text().clone())
                    .unwrap_or_default();
                let text = request(&self.driver, &self.prompts.choices(&params, &latest)).await?;
                self.console.say("\nWhat happens next?").await?;
                self.console.say(&text).await?;
                let choices = parse_choices(&text);
                debug!(parsed = choices.len(), "Parsed choices");

                let selection = self.read_selection().await?;
                if selection == QUIT_SENTINEL {
                    StoryState::Done {
                        params,
                        end: StoryEnd::Quit { round },
                    }
                } else {
                    StoryState::GeneratingContinuation {
                        params,
                        round,
                        choice: resolve_selection(&selection, &choices),
                    }
                }
            }

            StoryState::GeneratingContinuation {
                params,
                round,
                choice,
            } => {
                let prompt = self.prompts.continuation(&params, transcript, &choice);
                let text = request(&self.driver, &prompt).await?;
                self.commit_chapter(transcript, round + 1, text).await?;
                if round >= self.rounds {
                    StoryState::Done {
                        params,
                        end: StoryEnd::Finished,
                    }
                } else {
                    StoryState::AwaitingChoice {
                        params,
                        round: round + 1,
                    }
                }
            }

            done @ StoryState::Done { .. } => done,
        };
        Ok(next)
    }

    async fn read_selection(&mut self) -> ScrivenerResult<String> {
        loop {
            let selection = self
                .console
                .prompt("Choose 1-3, describe your own action, or type 'quit': ")
                .await?;
            if !selection.is_empty() {
                return Ok(selection);
            }
        }
    }

    async fn commit_chapter(
        &mut self,
        transcript: &mut Transcript,
        chapter: u32,
        text: String,
    ) -> ScrivenerResult<()> {
        let label = format!("Chapter {chapter}");
        self.console.say(&format!("\n=== {label} ===\n")).await?;
        self.console.say(&text).await?;
        transcript.push(label, text);
        Ok(())
    }
}
