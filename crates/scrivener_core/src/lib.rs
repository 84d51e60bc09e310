//! Core data types for the Scrivener prompt tools.
//!
//! This crate provides the request, response, and transcript types shared by
//! the completion drivers and the interactive sessions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;
mod transcript;

pub use message::Message;
pub use request::{
    Choice, CompletionRequest, CompletionRequestBuilder, CompletionRequestBuilderError,
    CompletionResponse,
};
pub use role::Role;
pub use transcript::{Transcript, TranscriptEntry};
