use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

pub const INPUT_TITLE: &str = " Time of day ";
pub const PLACEHOLDER: &str = "e.g. Morning, Dinner, After dinner";

/// Single-line time-of-day entry field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(),
        }
    }

    /// Current text of the entry field
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn clear(&mut self) {
        self.textarea = new_textarea();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(INPUT_TITLE)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(PLACEHOLDER);

    textarea
}
