//! Source language detection from file extensions.

use std::path::Path;

/// Programming language of a submitted source file.
///
/// Displays as the label used inside prompts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
)]
pub enum Language {
    /// Rust
    #[display("Rust")]
    Rust,
    /// Python
    #[display("Python")]
    Python,
    /// JavaScript (including JSX)
    #[display("JavaScript")]
    JavaScript,
    /// TypeScript (including TSX)
    #[display("TypeScript")]
    TypeScript,
    /// Java
    #[display("Java")]
    Java,
    /// C
    #[display("C")]
    C,
    /// C++
    #[display("C++")]
    Cpp,
    /// C#
    #[display("C#")]
    CSharp,
    /// Go
    #[display("Go")]
    Go,
    /// Ruby
    #[display("Ruby")]
    Ruby,
    /// PHP
    #[display("PHP")]
    Php,
    /// Swift
    #[display("Swift")]
    Swift,
    /// Kotlin
    #[display("Kotlin")]
    Kotlin,
    /// Scala
    #[display("Scala")]
    Scala,
    /// Shell script
    #[display("Shell")]
    Shell,
    /// HTML
    #[display("HTML")]
    Html,
    /// CSS
    #[display("CSS")]
    Css,
    /// SQL
    #[display("SQL")]
    Sql,
    /// Unknown or missing extension
    #[display("code")]
    Generic,
}

impl Language {
    /// Maps a file extension (without the dot, any case) to a language.
    ///
    /// Unrecognized extensions map to [`Language::Generic`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scrivener_prompt::Language;
    ///
    /// assert_eq!(Language::from_extension("RS"), Language::Rust);
    /// assert_eq!(Language::from_extension("xyz"), Language::Generic);
    /// assert_eq!(Language::Generic.to_string(), "code");
    /// ```
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "rs" => Language::Rust,
            "py" => Language::Python,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "java" => Language::Java,
            "c" | "h" => Language::C,
            "cpp" | "cc" | "cxx" | "hpp" => Language::Cpp,
            "cs" => Language::CSharp,
            "go" => Language::Go,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "swift" => Language::Swift,
            "kt" | "kts" => Language::Kotlin,
            "scala" => Language::Scala,
            "sh" | "bash" | "zsh" => Language::Shell,
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            _ => Language::Generic,
        }
    }

    /// Detects the language from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Generic)
    }

    /// Info string for a Markdown code fence. Empty for [`Language::Generic`].
    pub fn fence(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::Shell => "sh",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Generic => "",
        }
    }

    /// True for the fallback label.
    pub fn is_generic(&self) -> bool {
        matches!(self, Language::Generic)
    }
}
