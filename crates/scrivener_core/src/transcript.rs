//! Append-only history of generated segments.

use serde::{Deserialize, Serialize};

/// A labeled segment of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TranscriptEntry {
    /// Short label such as `Chapter 2` or `analysis`
    label: String,
    /// The generated text, verbatim
    text: String,
}

/// Ordered history of segments produced during one session.
///
/// Entries are only ever appended; nothing is edited or removed. Prompts that
/// need earlier context borrow the transcript at call time.
///
/// # Examples
///
/// ```
/// use scrivener_core::Transcript;
///
/// let mut transcript = Transcript::new();
/// transcript.push("Chapter 1", "It was dark.");
/// transcript.push("Chapter 2", "Then it was light.");
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.latest().map(|e| e.text().as_str()), Some("Then it was light."));
/// assert_eq!(transcript.render(), "It was dark.\n\nThen it was light.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            label: label.into(),
            text: text.into(),
        });
    }

    /// All entries in generation order.
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// First entry with the given label.
    pub fn find(&self, label: &str) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry texts joined by blank lines, oldest first.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
