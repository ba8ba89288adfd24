//! Prompt collaborator contract

use thiserror::Error;

/// How the user closed a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Ok,
    Cancel,
    /// The dialog was dismissed without pressing a button
    Close,
}

/// Buttons a prompt must offer
///
/// Interactive mode only ever asks for `OkCancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSet {
    OkCancel,
}

impl ButtonSet {
    /// Buttons to render, the confirming one first
    pub fn buttons(&self) -> &'static [Button] {
        match self {
            ButtonSet::OkCancel => &[Button::Ok, Button::Cancel],
        }
    }
}

/// What the user did with a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResponse {
    pub button: Button,
    /// Text typed into the prompt, if the surface reports any
    pub response_text: Option<String>,
}

impl PromptResponse {
    /// OK pressed with `text` entered
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            button: Button::Ok,
            response_text: Some(text.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            button: Button::Cancel,
            response_text: None,
        }
    }

    pub fn closed() -> Self {
        Self {
            button: Button::Close,
            response_text: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.button == Button::Ok
    }
}

/// The prompt surface itself failed (as opposed to the user cancelling)
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// UI-hosting context able to show a modal text prompt
///
/// Implementations block until the user answers.
pub trait ScriptContainer: Send + Sync {
    /// Human-readable name, used in debug output
    fn name(&self) -> &str {
        "script-container"
    }

    /// Show a modal prompt with `title`, `message` and the given buttons
    fn prompt(&self, title: &str, message: &str, buttons: ButtonSet) -> PromptResult<PromptResponse>;
}
