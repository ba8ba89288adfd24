//! Terminal prompt surface

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Password};

use super::traits::{ButtonSet, PromptError, PromptResponse, PromptResult, ScriptContainer};

/// Prompts on the controlling terminal
///
/// Asks for confirmation first, then reads the value as hidden input. Empty
/// input is accepted. Answering "no" at the confirmation maps to `Cancel`,
/// pressing Esc to `Close`.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn surface_error(e: dialoguer::Error) -> PromptError {
    PromptError::Io(e.into())
}

impl ScriptContainer for TerminalPrompt {
    fn name(&self) -> &str {
        "terminal"
    }

    fn prompt(&self, title: &str, message: &str, buttons: ButtonSet) -> PromptResult<PromptResponse> {
        let ButtonSet::OkCancel = buttons;

        let proceed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("{}: {}?", title, message))
            .default(true)
            .interact_opt()
            .map_err(surface_error)?;
        match proceed {
            Some(true) => {}
            Some(false) => return Ok(PromptResponse::cancelled()),
            None => return Ok(PromptResponse::closed()),
        }

        let text = Password::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()
            .map_err(surface_error)?;

        Ok(PromptResponse::ok(text))
    }
}
