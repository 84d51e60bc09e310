//! OpenAI-compatible chat completions integration.

mod client;
mod conversion;
mod dto;

pub use client::OpenAICompatibleClient;
pub use conversion::{from_chat_response, to_chat_request};
pub use dto::{ChatChoice, ChatErrorBody, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse};
