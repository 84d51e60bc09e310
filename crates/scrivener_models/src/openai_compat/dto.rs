//! Chat completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Message in a chat completions request or response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Lowercase role name
    role: String,
    /// Message text; absent for some non-text responses
    #[serde(default)]
    content: Option<String>,
}

impl ChatMessage {
    /// Creates a message.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Ordered messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Streaming is never requested
    #[builder(default = "false")]
    stream: bool,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// One returned choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Position in the choice list
    #[serde(default)]
    index: u32,
    /// Generated message
    #[serde(default)]
    message: Option<ChatMessage>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Error object some providers embed in a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatErrorBody {
    /// Human-readable message
    #[serde(default)]
    message: Option<String>,
}

/// Response body for `POST /chat/completions`.
///
/// Every field is optional so that malformed bodies surface as
/// `UnexpectedResponse` rather than a JSON error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    /// Returned choices
    #[serde(default)]
    choices: Option<Vec<ChatChoice>>,
    /// Embedded error
    #[serde(default)]
    error: Option<ChatErrorBody>,
}
