use crate::config::Config;
use crate::controller::{Notice, Phase, PresentationController};
use crate::input::InputState;
use crate::notification::NotificationState;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    SuggestButton,
    ResetButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::InputField => Focus::SuggestButton,
            Focus::SuggestButton => Focus::ResetButton,
            Focus::ResetButton => Focus::InputField,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::InputField => Focus::ResetButton,
            Focus::SuggestButton => Focus::InputField,
            Focus::ResetButton => Focus::SuggestButton,
        }
    }
}

/// Application state
pub struct App {
    pub input: InputState,
    pub controller: PresentationController,
    pub notification: NotificationState,
    pub focus: Focus,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            controller: PresentationController::new(),
            notification: NotificationState::new(config.notification.clone()),
            focus: Focus::InputField,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the entry field
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Suggest button: resolve the entry field and show the result or an error
    pub fn suggest(&mut self) {
        let text = self.input.text().to_string();
        self.controller.set_input(text);

        if let Some(notice) = self.controller.on_suggest_pressed() {
            self.notification.show_notice(&notice);
        }
    }

    /// Reset button: clear the entry field and hide the suggestion
    pub fn reset(&mut self) {
        let notice = self.controller.on_reset_pressed();
        self.input.clear();
        self.focus = Focus::InputField;
        self.notification.show_notice(&notice);
    }

    /// Show a startup warning, e.g. a config file that failed to load
    pub fn show_warning(&mut self, message: &str) {
        self.notification.show_notice(&Notice::error(message));
    }
}
