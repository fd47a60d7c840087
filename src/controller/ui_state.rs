/// Idle: no suggestion on screen. Showing: a suggestion is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Showing,
}

/// Mutable state of the single screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub input_text: String,
    pub output_text: String,
    pub output_visible: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.output_visible {
            Phase::Showing
        } else {
            Phase::Idle
        }
    }

    /// Text currently displayed in the output panel, if any
    pub fn visible_output(&self) -> Option<&str> {
        self.output_visible.then_some(self.output_text.as_str())
    }
}
