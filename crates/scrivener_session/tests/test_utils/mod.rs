//! Test doubles for the interactive sessions.

#![allow(dead_code)]

use async_trait::async_trait;
use scrivener_core::{Choice, CompletionRequest, CompletionResponse, Role};
use scrivener_error::{CompletionError, CompletionErrorKind, ScrivenerResult};
use scrivener_interface::{CompletionDriver, Console};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
    /// Fail on the given 1-based call, succeed with the text otherwise
    FailOnCall {
        call: usize,
        error: CompletionErrorKind,
        success_text: String,
    },
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(CompletionErrorKind),
}

/// Completion driver that answers from a script and records every request.
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    model_name: String,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock driver that fails only on the given 1-based call.
    pub fn new_fail_on_call(
        call: usize,
        error: CompletionErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        Self::new_with_behavior(MockBehavior::FailOnCall {
            call,
            error,
            success_text: success_text.into(),
        })
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// User prompt of every request, in order.
    pub fn user_prompts(&self) -> Vec<String> {
        self.requests()
            .iter()
            .flat_map(|req| {
                req.messages()
                    .iter()
                    .filter(|msg| *msg.role() == Role::User)
                    .map(|msg| msg.content().clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn next_response(&self, call: usize) -> ScrivenerResult<CompletionResponse> {
        let text = match &self.behavior {
            MockBehavior::Success(text) => text.clone(),
            MockBehavior::FailOnCall {
                call: failing,
                error,
                success_text,
            } => {
                if call == *failing {
                    return Err(CompletionError::new(error.clone()).into());
                }
                success_text.clone()
            }
            MockBehavior::Sequence(responses) => match responses.get(call - 1) {
                Some(MockResponse::Success(text)) => text.clone(),
                Some(MockResponse::Error(kind)) => {
                    return Err(CompletionError::new(kind.clone()).into());
                }
                None => {
                    return Err(CompletionError::new(CompletionErrorKind::Http(format!(
                        "Mock sequence exhausted (call {} beyond {} responses)",
                        call,
                        responses.len()
                    )))
                    .into());
                }
            },
        };
        Ok(CompletionResponse::new(vec![Choice::new(
            text,
            Some("stop".to_string()),
        )]))
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn generate(&self, req: &CompletionRequest) -> ScrivenerResult<CompletionResponse> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len()
        };
        self.next_response(call)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Console fed from a fixed list of lines that captures everything written.
///
/// Reading past the last line reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self) -> ScrivenerResult<Option<String>> {
        Ok(self.input.pop_front())
    }

    async fn write(&mut self, text: &str) -> ScrivenerResult<()> {
        self.output.push_str(text);
        Ok(())
    }
}
