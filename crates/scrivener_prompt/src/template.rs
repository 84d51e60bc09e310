//! The six fixed prompt templates.

use crate::{CHOICE_COUNT, GenerationParams, PromptSettings, ReviewParameters, StoryParameters};
use scrivener_core::Transcript;
use tracing::{debug, instrument};

const REVIEW_SYSTEM: &str = "You are an expert software engineer performing careful, constructive \
code reviews. Be specific, reference the code directly, and prefer concrete suggestions over \
general advice.";

const STORY_SYSTEM: &str = "You are a creative storyteller writing an interactive story. Keep the \
tone consistent with the chosen genre, write vivid prose, and keep every character and detail \
consistent with what has already happened.";

/// Kind of completion call a prompt is rendered for.
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
pub enum Operation {
    /// Code analysis
    #[display("analysis")]
    Analysis,
    /// Refactoring suggestions
    #[display("refactor")]
    Refactor,
    /// Documentation generation
    #[display("documentation")]
    Documentation,
    /// Opening chapter
    #[display("opening")]
    Opening,
    /// Continuation chapter
    #[display("continuation")]
    Continuation,
    /// Choice generation
    #[display("choices")]
    Choices,
}

/// Everything a completion call needs.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct RenderedPrompt {
    /// Which template produced this prompt
    operation: Operation,
    /// Fixed system instruction
    system: String,
    /// Interpolated user prompt
    user: String,
    /// Sampling parameters
    params: GenerationParams,
}

/// Renders session parameters into prompts.
///
/// # Examples
///
/// ```
/// use scrivener_prompt::{Genre, Operation, PromptBuilder, StoryParameters};
///
/// let builder = PromptBuilder::default();
/// let params = StoryParameters::new(Genre::Mystery, "Ada", "a lighthouse", "trust");
/// let prompt = builder.opening(&params);
///
/// assert_eq!(*prompt.operation(), Operation::Opening);
/// assert!(prompt.user().contains("Mystery"));
/// assert!(prompt.user().contains("Ada"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptBuilder {
    settings: PromptSettings,
}

impl PromptBuilder {
    /// Creates a builder with explicit generation settings.
    pub fn new(settings: PromptSettings) -> Self {
        Self { settings }
    }

    /// Generation settings in use.
    pub fn settings(&self) -> &PromptSettings {
        &self.settings
    }

    fn render(&self, operation: Operation, system: &str, user: String) -> RenderedPrompt {
        RenderedPrompt {
            operation,
            system: system.to_string(),
            user,
            params: self.settings.params(operation),
        }
    }

    /// Code analysis prompt.
    #[instrument(skip_all, fields(filename = %params.filename(), language = %params.language()))]
    pub fn analysis(&self, params: &ReviewParameters) -> RenderedPrompt {
        let user = format!(
            "Analyze the following code from `{filename}` (language: {language}).\n\n\
             Start with a short summary of what the code does. Then list:\n\
             1. Bugs or logic errors\n\
             2. Potential runtime issues and unhandled edge cases\n\
             3. Performance concerns\n\
             4. Readability and style improvements\n\n\
             {code_block}",
            language = params.language(),
            filename = params.filename(),
            code_block = code_block(params),
        );
        debug!(chars = user.len(), "Rendered analysis prompt");
        self.render(Operation::Analysis, REVIEW_SYSTEM, user)
    }

    /// Refactoring prompt. `analysis` is the text produced by the analysis step.
    #[instrument(skip_all, fields(filename = %params.filename()))]
    pub fn refactor(&self, params: &ReviewParameters, analysis: &str) -> RenderedPrompt {
        let user = format!(
            "Using the review below, rewrite the code from `{filename}` (language: {language}) to fix the \
             problems it raises and improve its structure. Return the complete refactored code \
             in a single code block, followed by a bullet list explaining each significant \
             change.\n\n\
             Review:\n{analysis}\n\n\
             Original code:\n{code_block}",
            language = params.language(),
            filename = params.filename(),
            code_block = code_block(params),
        );
        self.render(Operation::Refactor, REVIEW_SYSTEM, user)
    }

    /// Documentation prompt.
    #[instrument(skip_all, fields(filename = %params.filename()))]
    pub fn documentation(&self, params: &ReviewParameters) -> RenderedPrompt {
        let user = format!(
            "Write Markdown documentation for the following code from `{filename}` \
             (language: {language}). \
             Include an overview, a section for each function, class, or module with its \
             parameters and return values, and at least one usage example.\n\n\
             {code_block}",
            language = params.language(),
            filename = params.filename(),
            code_block = code_block(params),
        );
        self.render(Operation::Documentation, REVIEW_SYSTEM, user)
    }

    /// Opening chapter prompt.
    #[instrument(skip_all, fields(genre = %params.genre()))]
    pub fn opening(&self, params: &StoryParameters) -> RenderedPrompt {
        let user = format!(
            "Write the opening chapter of a {genre} story.\n\n\
             Main character: {character}\n\
             Setting: {setting}\n\
             Theme: {theme}\n\n\
             Write three to four paragraphs that introduce the character and the world, and end \
             at a moment where {character} must make a decision.",
            genre = params.genre(),
            character = params.character(),
            setting = params.setting(),
            theme = params.theme(),
        );
        self.render(Operation::Opening, STORY_SYSTEM, user)
    }

    /// Continuation prompt. Uses every chapter written so far as context.
    #[instrument(skip_all, fields(genre = %params.genre(), chapters = transcript.len()))]
    pub fn continuation(
        &self,
        params: &StoryParameters,
        transcript: &Transcript,
        choice: &str,
    ) -> RenderedPrompt {
        let user = format!(
            "Continue this {genre} story about {character}, set in {setting}, with the theme \
             of {theme}.\n\n\
             Story so far:\n{story}\n\n\
             The reader chose: {choice}\n\n\
             Write the next chapter in three to four paragraphs. Follow directly from the \
             reader's choice and end at a new decision point.",
            genre = params.genre(),
            character = params.character(),
            setting = params.setting(),
            theme = params.theme(),
            story = transcript.render(),
        );
        self.render(Operation::Continuation, STORY_SYSTEM, user)
    }

    /// Choice generation prompt for the most recent chapter.
    #[instrument(skip_all, fields(genre = %params.genre()))]
    pub fn choices(&self, params: &StoryParameters, latest_chapter: &str) -> RenderedPrompt {
        let user = format!(
            "Here is the latest chapter of a {genre} story about {character}:\n\n\
             {latest_chapter}\n\n\
             Suggest exactly {count} distinct choices for what {character} could do next. \
             Write each choice as a single sentence on its own line, numbered 1. to {count}. \
             Do not add any other text.",
            genre = params.genre(),
            character = params.character(),
            count = CHOICE_COUNT,
        );
        self.render(Operation::Choices, STORY_SYSTEM, user)
    }
}

fn code_block(params: &ReviewParameters) -> String {
    format!(
        "```{fence}\n{code}\n```",
        fence = params.language().fence(),
        code = params.code(),
    )
}
