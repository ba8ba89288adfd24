//! Prompt surfaces used by interactive mode
//!
//! The host UI is reached through the [`ScriptContainer`] trait. With the
//! `terminal` feature, [`TerminalPrompt`] prompts on the controlling terminal.

mod traits;
#[cfg(feature = "terminal")]
mod terminal;

pub use traits::{Button, ButtonSet, PromptResponse, PromptError, PromptResult, ScriptContainer};
#[cfg(feature = "terminal")]
pub use terminal::TerminalPrompt;
