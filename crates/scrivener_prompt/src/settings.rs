//! Sampling parameters per operation.

use crate::Operation;
use serde::{Deserialize, Serialize};

/// Temperature and token budget for one completion call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct GenerationParams {
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
}

impl GenerationParams {
    /// Creates generation parameters.
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Generation parameters for each of the six operations.
///
/// Missing tables in a configuration file fall back to the defaults.
///
/// # Examples
///
/// ```
/// use scrivener_prompt::{Operation, PromptSettings};
///
/// let settings = PromptSettings::default();
/// assert!(*settings.params(Operation::Refactor).temperature() < 0.5);
/// assert!(*settings.params(Operation::Opening).temperature() > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default, deny_unknown_fields)]
pub struct PromptSettings {
    /// Code analysis
    analysis: GenerationParams,
    /// Refactoring suggestions
    refactor: GenerationParams,
    /// Documentation generation
    documentation: GenerationParams,
    /// Opening chapter
    opening: GenerationParams,
    /// Continuation chapter
    continuation: GenerationParams,
    /// Choice generation
    choices: GenerationParams,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            analysis: GenerationParams::new(0.3, 1500),
            refactor: GenerationParams::new(0.2, 2000),
            documentation: GenerationParams::new(0.3, 2000),
            opening: GenerationParams::new(0.8, 800),
            continuation: GenerationParams::new(0.8, 800),
            choices: GenerationParams::new(0.9, 300),
        }
    }
}

impl PromptSettings {
    /// Parameters for an operation.
    pub fn params(&self, operation: Operation) -> GenerationParams {
        match operation {
            Operation::Analysis => self.analysis,
            Operation::Refactor => self.refactor,
            Operation::Documentation => self.documentation,
            Operation::Opening => self.opening,
            Operation::Continuation => self.continuation,
            Operation::Choices => self.choices,
        }
    }
}
