//! Tests for menu selection parsing.

use scrivener_prompt::{Genre, Language, parse_choices, resolve_selection};
use std::path::Path;

#[test]
fn test_parse_numbered_choices() {
    let text = "Here are the options:\n\n1. Climb the tower\n2) Follow the light\n**3.** Wait for dawn\n";
    assert_eq!(
        parse_choices(text),
        vec!["Climb the tower", "Follow the light", "Wait for dawn"]
    );
}

#[test]
fn test_parse_keeps_first_three_distinct_numbers() {
    let text = "1. A\n1. Duplicate\n2. B\n3. C\n4. D";
    assert_eq!(parse_choices(text), vec!["A", "B", "C"]);
}

#[test]
fn test_parse_unnumbered_text() {
    assert!(parse_choices("Ada could run, hide, or fight.").is_empty());
}

#[test]
fn test_resolve_selection() {
    let choices = vec!["Climb".to_string(), "Run".to_string(), "Hide".to_string()];
    assert_eq!(resolve_selection("3", &choices), "Hide");
    assert_eq!(resolve_selection(" 1 ", &choices), "Climb");
    assert_eq!(resolve_selection("0", &choices), "0");
    assert_eq!(resolve_selection("4", &choices), "4");
    assert_eq!(resolve_selection("Shout for help", &choices), "Shout for help");
    assert_eq!(resolve_selection("2", &[]), "2");
}

#[test]
fn test_genre_selection() {
    assert_eq!(Genre::from_selection("1"), Genre::Fantasy);
    assert_eq!(Genre::from_selection("8"), Genre::Comedy);
    assert_eq!(Genre::from_selection("HORROR"), Genre::Horror);
    assert_eq!(Genre::from_selection("0"), Genre::Fantasy);
    assert_eq!(Genre::from_selection("9"), Genre::Fantasy);
    assert_eq!(Genre::from_selection("18446744073709551615"), Genre::Fantasy);
    assert_eq!(Genre::from_selection("western"), Genre::Fantasy);
}

#[test]
fn test_genre_menu_is_numbered() {
    let menu = Genre::menu();
    assert_eq!(menu.lines().count(), 8);
    assert!(menu.starts_with("1. Fantasy"));
    assert!(menu.contains("2. Science Fiction"));
    assert!(menu.ends_with("8. Comedy"));
}

#[test]
fn test_language_detection() {
    assert_eq!(Language::from_extension("rs"), Language::Rust);
    assert_eq!(Language::from_extension("PY"), Language::Python);
    assert_eq!(Language::from_extension("xyz"), Language::Generic);
    assert_eq!(Language::from_path(Path::new("web/app.tsx")), Language::TypeScript);
    assert_eq!(Language::from_path(Path::new("Makefile")), Language::Generic);
    assert_eq!(Language::Generic.to_string(), "code");
}
