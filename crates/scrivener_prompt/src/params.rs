//! Session parameters captured once at the start of a run.

use crate::{Genre, Language};
use std::path::{Path, PathBuf};

const DOCUMENTATION_SUFFIX: &str = "_documentation";

/// Code submitted for review.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ReviewParameters {
    /// Display name used in prompts and for the documentation file
    filename: String,
    /// Where the code was read from; `None` for pasted snippets
    source_path: Option<PathBuf>,
    /// Detected language
    language: Language,
    /// The code body
    code: String,
}

impl ReviewParameters {
    /// Parameters for code read from a file. The language comes from the
    /// file extension.
    pub fn from_file(path: impl Into<PathBuf>, code: impl Into<String>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            filename,
            language: Language::from_path(&path),
            source_path: Some(path),
            code: code.into(),
        }
    }

    /// Parameters for pasted code.
    pub fn from_snippet(filename: impl Into<String>, language: Language, code: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            source_path: None,
            language,
            code: code.into(),
        }
    }

    /// `<basename>_documentation.md` for the submitted file.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_prompt::ReviewParameters;
    ///
    /// let params = ReviewParameters::from_file("src/app.js", "let x = 1;");
    /// assert_eq!(params.documentation_file_name(), "app_documentation.md");
    /// ```
    pub fn documentation_file_name(&self) -> String {
        let stem = Path::new(&self.filename)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.filename.clone());
        format!("{stem}{DOCUMENTATION_SUFFIX}.md")
    }
}

/// Story setup collected before the opening chapter.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct StoryParameters {
    /// Selected genre
    genre: Genre,
    /// Protagonist name
    character: String,
    /// Where the story takes place
    setting: String,
    /// Central theme
    theme: String,
}

impl StoryParameters {
    /// Creates story parameters.
    pub fn new(
        genre: Genre,
        character: impl Into<String>,
        setting: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            genre,
            character: character.into(),
            setting: setting.into(),
            theme: theme.into(),
        }
    }
}
