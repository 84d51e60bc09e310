//! Conversions between Scrivener and chat completions types.

use super::dto::{ChatMessage, ChatRequest, ChatResponse};
use scrivener_core::{Choice, CompletionRequest, CompletionResponse};
use scrivener_error::{BuilderError, CompletionError, CompletionErrorKind, ScrivenerResult};

/// Converts a [`CompletionRequest`] to a wire request.
///
/// The request's own model wins over `default_model`.
///
/// # Errors
///
/// Returns a builder error if a required field is missing.
pub fn to_chat_request(request: &CompletionRequest, default_model: &str) -> ScrivenerResult<ChatRequest> {
    let messages = request
        .messages()
        .iter()
        .map(|message| ChatMessage::new(message.role().to_string(), message.content().clone()))
        .collect::<Vec<_>>();

    let model = request
        .model()
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let chat = ChatRequest::builder()
        .model(model)
        .messages(messages)
        .temperature(*request.temperature())
        .max_tokens(*request.max_tokens())
        .build()
        .map_err(|e| BuilderError::from(format!("Failed to build chat request: {}", e)))?;
    Ok(chat)
}

/// Converts a wire response to a [`CompletionResponse`].
///
/// # Errors
///
/// - `Api` when the body carries an `error` object
/// - `UnexpectedResponse` when there is no choice list, the list is empty,
///   or the first choice carries no text
pub fn from_chat_response(response: &ChatResponse, status: u16) -> ScrivenerResult<CompletionResponse> {
    if let Some(error) = response.error() {
        let message = error
            .message()
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(CompletionError::new(CompletionErrorKind::Api { status, message }).into());
    }

    let choices = response.choices().as_ref().ok_or_else(|| {
        CompletionError::new(CompletionErrorKind::UnexpectedResponse(
            "response has no `choices` field".to_string(),
        ))
    })?;

    let first_has_text = choices
        .first()
        .and_then(|choice| choice.message().as_ref())
        .and_then(|message| message.content().as_ref())
        .is_some();
    if !first_has_text {
        return Err(CompletionError::new(CompletionErrorKind::UnexpectedResponse(
            "first choice has no message content".to_string(),
        ))
        .into());
    }

    let choices = choices
        .iter()
        .map(|choice| {
            let text = choice
                .message()
                .as_ref()
                .and_then(|message| message.content().clone())
                .unwrap_or_default();
            Choice::new(text, choice.finish_reason().clone())
        })
        .collect();

    Ok(CompletionResponse::new(choices))
}
