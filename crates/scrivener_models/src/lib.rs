//! Chat completion provider integrations for Scrivener.
//!
//! The only provider speaks the OpenAI chat-completions wire format, which
//! covers the Hugging Face router, OpenAI itself, Groq, Together, and local
//! servers such as llama.cpp or vLLM.
//!
//! # Example
//!
//! ```no_run
//! use scrivener_interface::CompletionDriver;
//! use scrivener_models::OpenAICompatibleClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAICompatibleClient::new(
//!     std::env::var("HF_TOKEN")?,
//!     "meta-llama/Llama-3.1-8B-Instruct",
//!     "https://router.huggingface.co/v1",
//! )?;
//! let text = client
//!     .complete("You are terse.", "Name one prime number.", 0.2, 16)
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai_compat;

pub use openai_compat::{
    ChatChoice, ChatErrorBody, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, OpenAICompatibleClient,
    from_chat_response, to_chat_request,
};
