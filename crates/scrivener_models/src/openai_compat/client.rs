//! OpenAI-compatible chat completions client.

use super::conversion::{from_chat_response, to_chat_request};
use super::dto::ChatResponse;
use async_trait::async_trait;
use reqwest::Client;
use scrivener_config::ClientConfig;
use scrivener_core::{CompletionRequest, CompletionResponse};
use scrivener_error::{CompletionError, CompletionErrorKind, HttpError, ScrivenerResult};
use scrivener_interface::CompletionDriver;
use tracing::{debug, error, instrument, warn};

/// Client for any endpoint that speaks `POST /chat/completions`.
///
/// Every call is sent exactly once; failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAICompatibleClient {
    /// Creates a client for `base_url` (the `/chat/completions` path is appended).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %model.as_ref(), base_url = %base_url.as_ref()))]
    pub fn new(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
        base_url: impl AsRef<str>,
    ) -> ScrivenerResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        let endpoint = format!("{}/chat/completions", base_url.as_ref().trim_end_matches('/'));

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.as_ref().to_string(),
            endpoint,
        })
    }

    /// Creates a client from configuration, reading the API key from the
    /// configured environment variable.
    ///
    /// A missing key is not an error here; it only logs a warning, and the
    /// first request fails with the service's authentication error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn from_config(config: &ClientConfig) -> ScrivenerResult<Self> {
        let api_key = std::env::var(config.api_key_env()).unwrap_or_else(|_| {
            warn!(
                variable = %config.api_key_env(),
                "API key not set; requests will be sent without credentials"
            );
            String::new()
        });

        Self::new(api_key, config.model(), config.base_url())
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompatibleClient {
    #[instrument(skip(self, req), fields(provider = "openai_compat", model = %self.model))]
    async fn generate(&self, req: &CompletionRequest) -> ScrivenerResult<CompletionResponse> {
        let body = to_chat_request(req, &self.model)?;
        debug!(url = %self.endpoint, messages = body.messages().len(), "Sending chat completion request");

        let mut request = self.client.post(&self.endpoint).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Chat completion request failed");
            CompletionError::new(CompletionErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            CompletionError::new(CompletionErrorKind::Http(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ChatResponse>(&text)
                .ok()
                .and_then(|body| body.error().as_ref().and_then(|e| e.message().clone()))
                .unwrap_or(text);
            error!(status = status.as_u16(), %message, "Chat completion returned an error status");
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let body: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            CompletionError::new(CompletionErrorKind::UnexpectedResponse(format!(
                "Body is not a chat completion: {}",
                e
            )))
        })?;

        let response = from_chat_response(&body, status.as_u16())?;
        debug!(choices = response.choices().len(), "Received chat completion");
        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai_compat"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
