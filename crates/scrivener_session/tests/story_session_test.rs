//! Tests for the interactive story session.

mod test_utils;

use scrivener_core::Transcript;
use scrivener_error::CompletionErrorKind;
use scrivener_prompt::{Genre, PromptBuilder, StoryParameters};
use scrivener_session::{StoryEnd, StorySession, StoryState};
use test_utils::{MockDriver, ScriptedConsole};

const CHOICES: &str = "1. Climb the tower\n2. Follow the light\n3. Wait for dawn";

fn session(driver: MockDriver, lines: Vec<&str>, rounds: u32) -> StorySession<MockDriver, ScriptedConsole> {
    StorySession::new(driver, ScriptedConsole::new(lines), PromptBuilder::default(), rounds)
}

fn setup_lines(genre: &'static str) -> Vec<&'static str> {
    vec![genre, "Ada", "a lighthouse", "trust"]
}

#[tokio::test]
async fn test_full_story_makes_eleven_calls() {
    let mut lines = setup_lines("3");
    lines.extend(["1", "2", "3", "1", "2"]);
    let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

    let outcome = session.run().await.unwrap();

    assert_eq!(*outcome.end(), StoryEnd::Finished);
    assert_eq!(session.driver().call_count(), 11);
    assert_eq!(outcome.transcript().len(), 6);
    assert_eq!(outcome.continuations(), 5);
    assert_eq!(outcome.transcript().entries()[0].label(), "Chapter 1");
    assert_eq!(outcome.transcript().latest().unwrap().label(), "Chapter 6");
    assert_eq!(*outcome.params().genre(), Genre::Mystery);
}

#[tokio::test]
async fn test_quit_at_each_round() {
    for k in 1..=5u32 {
        let mut lines = setup_lines("1");
        lines.extend(std::iter::repeat_n("1", (k - 1) as usize));
        lines.push("quit");
        let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

        let outcome = session.run().await.unwrap();

        assert_eq!(*outcome.end(), StoryEnd::Quit { round: k });
        assert_eq!(session.driver().call_count(), 2 * k as usize, "quit at round {k}");
        assert_eq!(outcome.transcript().len(), k as usize);
        let last = session.driver().user_prompts().pop().unwrap();
        assert!(last.contains("Suggest exactly 3 distinct choices"));
    }
}

#[tokio::test]
async fn test_empty_choice_reprompts() {
    let mut lines = setup_lines("1");
    lines.extend(["", "   ", "quit"]);
    let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

    let outcome = session.run().await.unwrap();

    assert_eq!(*outcome.end(), StoryEnd::Quit { round: 1 });
    assert_eq!(session.driver().call_count(), 2);
    assert_eq!(session.console().remaining(), 0);
}

#[tokio::test]
async fn test_unrecognized_genre_defaults() {
    let mut lines = setup_lines("42");
    lines.push("quit");
    let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

    let outcome = session.run().await.unwrap();

    assert_eq!(*outcome.params().genre(), Genre::Fantasy);
    assert!(session.driver().user_prompts()[0].contains("Fantasy"));
}

#[tokio::test]
async fn test_numbered_choice_resolves_to_its_text() {
    let mut lines = setup_lines("1");
    lines.extend(["2", "Sing loudly", "quit"]);
    let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

    session.run().await.unwrap();

    let prompts = session.driver().user_prompts();
    assert_eq!(prompts.len(), 6);
    assert!(prompts[2].contains("The reader chose: Follow the light"));
    assert!(prompts[4].contains("The reader chose: Sing loudly"));
    // Continuations see every earlier chapter.
    assert!(prompts[4].contains("Story so far:"));
}

#[tokio::test]
async fn test_zero_rounds_writes_only_the_opening() {
    let mut session = session(MockDriver::new_success("Once upon a time"), setup_lines("2"), 0);

    let outcome = session.run().await.unwrap();

    assert_eq!(*outcome.end(), StoryEnd::Finished);
    assert_eq!(session.driver().call_count(), 1);
    assert_eq!(outcome.transcript().len(), 1);
}

#[tokio::test]
async fn test_failed_continuation_stops_the_story() {
    let mut lines = setup_lines("1");
    lines.extend(["1", "1"]);
    let driver = MockDriver::new_fail_on_call(
        3,
        CompletionErrorKind::Api {
            status: 429,
            message: "rate limited".to_string(),
        },
        CHOICES,
    );
    let mut session = session(driver, lines, 5);

    let err = session.run().await.unwrap_err();

    assert!(err.is_completion());
    assert_eq!(session.driver().call_count(), 3);
    assert_eq!(session.console().remaining(), 1);
}

#[tokio::test]
async fn test_step_quit_moves_to_done() {
    let params = StoryParameters::new(Genre::Horror, "Ada", "a crypt", "fear");
    let mut transcript = Transcript::new();
    transcript.push("Chapter 1", "It was dark.");
    let mut session = session(MockDriver::new_success(CHOICES), vec!["quit"], 5);

    let next = session
        .step(
            StoryState::AwaitingChoice {
                params: params.clone(),
                round: 2,
            },
            &mut transcript,
        )
        .await
        .unwrap();

    assert_eq!(
        next,
        StoryState::Done {
            params,
            end: StoryEnd::Quit { round: 2 },
        }
    );
    assert!(session.driver().user_prompts()[0].contains("It was dark."));
}

#[tokio::test]
async fn test_only_lowercase_quit_stops_the_story() {
    let mut lines = setup_lines("1");
    lines.extend(["Quit", "quit"]);
    let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

    let outcome = session.run().await.unwrap();

    assert_eq!(*outcome.end(), StoryEnd::Quit { round: 2 });
    assert_eq!(session.driver().call_count(), 4);
    assert!(session.driver().user_prompts()[2].contains("The reader chose: Quit"));
}

#[tokio::test]
async fn test_genre_zero_defaults() {
    let mut lines = setup_lines("0");
    lines.push("quit");
    let mut session = session(MockDriver::new_success(CHOICES), lines, 5);

    let outcome = session.run().await.unwrap();

    assert_eq!(*outcome.params().genre(), Genre::Fantasy);
    assert_eq!(session.driver().call_count(), 2);
}
