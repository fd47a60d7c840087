use super::notice::Notice;
use super::ui_state::{Phase, UiState};
use crate::suggestion::resolve;

pub const RESET_NOTICE: &str = "App reset";

/// Drives [`UiState`] in response to the Suggest and Reset buttons
#[derive(Debug, Default)]
pub struct PresentationController {
    state: UiState,
}

impl PresentationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Mirror the current contents of the entry field
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Resolve the current input.
    ///
    /// On success the suggestion is shown and no notice is produced. On
    /// failure the output is hidden and the returned notice carries the
    /// error message.
    pub fn on_suggest_pressed(&mut self) -> Option<Notice> {
        log::debug!("Suggest pressed with input {:?}", self.state.input_text);

        match resolve(&self.state.input_text) {
            Ok(suggestion) => {
                log::debug!("Displaying suggestion: {}", suggestion);
                self.state.output_text = suggestion.to_string();
                self.state.output_visible = true;
                None
            }
            Err(e) => {
                log::warn!("Error: {}", e);
                self.state.output_visible = false;
                Some(Notice::error(e.to_string()))
            }
        }
    }

    /// Clear input and output and return to Idle. Always succeeds.
    pub fn on_reset_pressed(&mut self) -> Notice {
        self.state = UiState::new();
        log::debug!("App reset completed");
        Notice::info(RESET_NOTICE)
    }
}

#[cfg(test)]
#[path = "presentation_tests.rs"]
mod presentation_tests;
