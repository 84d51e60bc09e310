//! Prompt templates for the code review and story sessions.
//!
//! Everything here is pure: a [`PromptBuilder`] maps an [`Operation`], the
//! session parameters, and any earlier context to a [`RenderedPrompt`]
//! carrying the system instruction, user prompt, and sampling parameters.
//!
//! Raw menu selections are mapped to typed values by total functions
//! ([`Genre::from_selection`], [`Language::from_extension`]) that fall back to
//! a defined default instead of failing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choices;
mod genre;
mod language;
mod params;
mod settings;
mod template;

pub use choices::{CHOICE_COUNT, parse_choices, resolve_selection};
pub use genre::Genre;
pub use language::Language;
pub use params::{ReviewParameters, StoryParameters};
pub use settings::{GenerationParams, PromptSettings};
pub use template::{Operation, PromptBuilder, RenderedPrompt};
