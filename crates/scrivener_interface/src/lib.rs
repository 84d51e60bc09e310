//! Trait definitions for the Scrivener prompt tools.
//!
//! Two seams keep the sessions testable: [`CompletionDriver`] abstracts the
//! remote completion service and [`Console`] abstracts the terminal.

mod console;
mod traits;

pub use console::Console;
pub use traits::CompletionDriver;
