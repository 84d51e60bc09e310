//! Story genre menu.

use strum::IntoEnumIterator;

/// Genre offered by the story menu, numbered 1-8 in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Genre {
    /// Default when the selection is not recognized
    #[default]
    #[display("Fantasy")]
    Fantasy,
    /// Science fiction
    #[display("Science Fiction")]
    ScienceFiction,
    /// Mystery
    #[display("Mystery")]
    Mystery,
    /// Horror
    #[display("Horror")]
    Horror,
    /// Romance
    #[display("Romance")]
    Romance,
    /// Adventure
    #[display("Adventure")]
    Adventure,
    /// Historical fiction
    #[display("Historical Fiction")]
    Historical,
    /// Comedy
    #[display("Comedy")]
    Comedy,
}

impl Genre {
    /// Maps a raw menu answer to a genre.
    ///
    /// Accepts the menu number or the genre name in any case. Anything else
    /// yields the default genre.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_prompt::Genre;
    ///
    /// assert_eq!(Genre::from_selection("3"), Genre::Mystery);
    /// assert_eq!(Genre::from_selection(" science fiction "), Genre::ScienceFiction);
    /// assert_eq!(Genre::from_selection("42"), Genre::Fantasy);
    /// assert_eq!(Genre::from_selection("0"), Genre::Fantasy);
    /// assert_eq!(Genre::from_selection(""), Genre::Fantasy);
    /// ```
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if let Ok(number) = selection.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| Genre::iter().nth(index))
                .unwrap_or_default();
        }
        Genre::iter()
            .find(|genre| genre.to_string().eq_ignore_ascii_case(selection))
            .unwrap_or_default()
    }

    /// One-based menu number.
    pub fn number(&self) -> usize {
        Genre::iter()
            .position(|genre| genre == *self)
            .map_or(1, |index| index + 1)
    }

    /// The numbered menu shown to the user, one genre per line.
    pub fn menu() -> String {
        Genre::iter()
            .map(|genre| format!("{}. {}", genre.number(), genre))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
