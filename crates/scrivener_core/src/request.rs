//! Request and response types for chat completion.

use crate::Message;
use scrivener_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};

/// One chat-completion request.
///
/// Built fresh for every call and never persisted. When `model` is `None`
/// the driver's configured model is used.
///
/// # Examples
///
/// ```
/// use scrivener_core::{CompletionRequest, Role};
///
/// let request = CompletionRequest::chat("You are terse.", "Say hi", 0.2, 64);
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.messages()[0].role(), Role::System);
/// assert_eq!(*request.max_tokens(), 64);
/// assert!(request.model().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct CompletionRequest {
    /// Ordered role-tagged messages
    messages: Vec<Message>,
    /// Sampling temperature
    temperature: f32,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Model identifier override
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// System instruction followed by a single user prompt.
    pub fn chat(
        system: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            messages: vec![Message::system(system), Message::user(prompt)],
            temperature,
            max_tokens,
            model: None,
        }
    }
}

impl From<CompletionRequestBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: CompletionRequestBuilderError) -> Self {
        match err {
            CompletionRequestBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            CompletionRequestBuilderError::ValidationError(msg) => BuilderError::from(msg),
        }
    }
}

/// A single returned completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Choice {
    /// Generated text
    text: String,
    /// Why generation stopped, as reported by the service
    #[serde(default)]
    finish_reason: Option<String>,
}

impl Choice {
    /// Creates a choice.
    pub fn new(text: impl Into<String>, finish_reason: Option<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason,
        }
    }
}

/// The choices returned for one request.
///
/// # Examples
///
/// ```
/// use scrivener_core::{Choice, CompletionResponse};
///
/// let response = CompletionResponse::new(vec![
///     Choice::new("first", None),
///     Choice::new("second", None),
/// ]);
/// assert_eq!(response.first_text(), Some("first"));
///
/// assert_eq!(CompletionResponse::new(vec![]).first_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionResponse {
    /// Choices in the order the service returned them
    choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Creates a response from choices.
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    /// Text of the first choice, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.text.as_str())
    }
}
