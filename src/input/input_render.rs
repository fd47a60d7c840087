//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use super::input_state::INPUT_TITLE;
use crate::app::{App, Focus};

/// Render the time-of-day entry field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::InputField;

    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(INPUT_TITLE)
            .border_style(Style::default().fg(border_color)),
    );

    // Hide the cursor block when another control has focus
    let cursor_style = if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
