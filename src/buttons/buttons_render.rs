//! Suggest / Reset button row

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::widgets::popup::centered_horizontally;

pub const SUGGEST_LABEL: &str = "Suggest";
pub const RESET_LABEL: &str = "Reset";

const BUTTON_WIDTH: u16 = 14;
const ROW_WIDTH: u16 = BUTTON_WIDTH * 2 + 2;

/// Render both buttons side by side, centered in `area`
pub fn render_row(app: &App, frame: &mut Frame, area: Rect) {
    let row = centered_horizontally(area, ROW_WIDTH);
    let [suggest_area, _, reset_area] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(2),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(row);

    render_button(
        frame,
        suggest_area,
        SUGGEST_LABEL,
        app.focus == Focus::SuggestButton,
    );
    render_button(
        frame,
        reset_area,
        RESET_LABEL,
        app.focus == Focus::ResetButton,
    );
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (border_color, label_style) = if focused {
        (
            Color::Cyan,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Color::DarkGray, Style::default().fg(Color::White))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let button = Paragraph::new(label)
        .block(block)
        .style(label_style)
        .alignment(Alignment::Center);

    frame.render_widget(button, area);
}
