//! Trait definitions for completion backends.

use async_trait::async_trait;
use scrivener_core::{CompletionRequest, CompletionResponse};
use scrivener_error::{CompletionError, CompletionErrorKind, ScrivenerResult};
use tracing::debug;

/// Core trait that every completion backend implements.
///
/// Calls are fire-once: implementations must not retry on their own.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send one request and return every choice the service produced.
    async fn generate(&self, req: &CompletionRequest) -> ScrivenerResult<CompletionResponse>;

    /// Provider name (e.g., "openai_compat").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when a request does not override it.
    fn model_name(&self) -> &str;

    /// Render a system instruction plus one user prompt and return the text of
    /// the first choice.
    ///
    /// # Errors
    ///
    /// Propagates driver failures. Returns
    /// [`CompletionErrorKind::UnexpectedResponse`] when no choice came back.
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> ScrivenerResult<String> {
        let request = CompletionRequest::chat(system, prompt, temperature, max_tokens);
        let response = self.generate(&request).await?;
        let text = response.first_text().ok_or_else(|| {
            CompletionError::new(CompletionErrorKind::UnexpectedResponse(
                "response contained no choices".to_string(),
            ))
        })?;
        debug!(chars = text.len(), "Received completion text");
        Ok(text.to_string())
    }
}
