//! Tests for the session transcript.

use scrivener_core::Transcript;

#[test]
fn test_entries_keep_insertion_order() {
    let mut transcript = Transcript::new();
    transcript.push("Chapter 1", "The door creaked.");
    transcript.push("Chapter 2", "Ada stepped inside.");

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.entries()[0].label(), "Chapter 1");
    assert_eq!(transcript.latest().unwrap().text(), "Ada stepped inside.");
}

#[test]
fn test_find_by_label() {
    let mut transcript = Transcript::new();
    transcript.push("analysis", "Looks fine.");
    transcript.push("refactor", "Rename x.");

    assert_eq!(transcript.find("refactor").unwrap().text(), "Rename x.");
    assert!(transcript.find("documentation").is_none());
}

#[test]
fn test_render_joins_with_blank_lines() {
    let mut transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert_eq!(transcript.render(), "");

    transcript.push("Chapter 1", "First.");
    transcript.push("Chapter 2", "Second.");
    assert_eq!(transcript.render(), "First.\n\nSecond.");
}
