//! Tests for the terminal input helpers.

mod test_utils;

use scrivener_error::{InputErrorKind, ScrivenerErrorKind};
use scrivener_session::{collect_snippet, confirm, read_source_file};
use test_utils::ScriptedConsole;

#[tokio::test]
async fn test_snippet_stops_at_exact_sentinel() {
    let mut console = ScriptedConsole::new(["fn main() {", "  END", "}", "END", "after"]);

    let code = collect_snippet(&mut console).await.unwrap();

    assert_eq!(code, "fn main() {\n  END\n}");
    assert_eq!(console.remaining(), 1);
}

#[tokio::test]
async fn test_snippet_ends_at_end_of_input() {
    let mut console = ScriptedConsole::new(["x = 1\r", "y = 2"]);

    let code = collect_snippet(&mut console).await.unwrap();

    assert_eq!(code, "x = 1\ny = 2");
}

#[tokio::test]
async fn test_confirm_accepts_yes_in_any_case() {
    let mut console = ScriptedConsole::new([" Yes ", "no", "yep"]);

    assert!(confirm(&mut console, "Continue?").await.unwrap());
    assert!(!confirm(&mut console, "Continue?").await.unwrap());
    assert!(!confirm(&mut console, "Continue?").await.unwrap());
    assert!(console.output().contains("Continue? (yes/no): "));
}

#[tokio::test]
async fn test_confirm_on_closed_input_fails() {
    let mut console = ScriptedConsole::new(Vec::<String>::new());

    let err = confirm(&mut console, "Continue?").await.unwrap_err();

    assert!(err.is_input());
}

#[tokio::test]
async fn test_read_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.rs");

    let err = read_source_file(&path).await.unwrap_err();

    match err.kind() {
        ScrivenerErrorKind::Input(input) => match &input.kind {
            InputErrorKind::FileRead { path: reported, .. } => {
                assert!(reported.ends_with("nope.rs"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        },
        other => panic!("expected input error, got {other:?}"),
    }
}
