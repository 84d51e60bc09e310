//! Parsing of generated story choices.

use std::sync::LazyLock;

use regex::Regex;

/// Number of choices requested after each chapter.
pub const CHOICE_COUNT: usize = 3;

// "1. text", "2) text", "**3:** text", "Choice 1 - text"
static CHOICE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:[-*]\s*)?(?:\*\*)?(?:Choice\s+)?([1-9])\s*[.):\-]\s*(?:\*\*)?\s*(.+?)\s*$")
        .expect("Valid choice regex")
});

/// Extracts numbered options from generated choice text.
///
/// Options are returned in the order their numbers first appear, at most
/// [`CHOICE_COUNT`] of them. Unnumbered text yields an empty list.
///
/// # Examples
///
/// ```
/// use scrivener_prompt::parse_choices;
///
/// let text = "Here are your options:\n1. Open the door\n2) Run away\n3: Call for help";
/// assert_eq!(parse_choices(text), vec!["Open the door", "Run away", "Call for help"]);
/// ```
pub fn parse_choices(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let mut choices = Vec::new();
    for captures in CHOICE_LINE.captures_iter(text) {
        let number = &captures[1];
        if seen.iter().any(|n| n == number) {
            continue;
        }
        let body = captures[2].trim_end_matches("**").trim();
        if body.is_empty() {
            continue;
        }
        seen.push(number.to_string());
        choices.push(body.to_string());
        if choices.len() == CHOICE_COUNT {
            break;
        }
    }
    choices
}

/// Resolves the reader's answer to the action used for the next chapter.
///
/// A menu number picks the matching parsed choice; any other text is the
/// reader's own action and is used verbatim.
///
/// # Examples
///
/// ```
/// use scrivener_prompt::resolve_selection;
///
/// let choices = vec!["Open the door".to_string(), "Run away".to_string()];
/// assert_eq!(resolve_selection("2", &choices), "Run away");
/// assert_eq!(resolve_selection("5", &choices), "5");
/// assert_eq!(resolve_selection("Sing loudly", &choices), "Sing loudly");
/// ```
pub fn resolve_selection(selection: &str, choices: &[String]) -> String {
    let selection = selection.trim();
    selection
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| choices.get(index))
        .cloned()
        .unwrap_or_else(|| selection.to_string())
}
