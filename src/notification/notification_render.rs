use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::NotificationState;
use crate::controller::Severity;
use crate::widgets::popup::{clear_area, top_right_popup};

const MAX_WIDTH: u16 = 60;
const HORIZONTAL_PADDING: u16 = 4;

/// Render the active notification, dropping it first if it has expired
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_expired();

    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let (width, height) = notification_size(&notification.message, frame_area.width);
    let area = top_right_popup(frame_area, width, height);

    let color = match notification.severity {
        Severity::Info => Color::Green,
        Severity::Error => Color::Red,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(notification.message.as_str())
        .block(block)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });

    clear_area(frame, area);
    frame.render_widget(paragraph, area);
}

/// Box size for `message`: one line when it fits, wrapped otherwise
fn notification_size(message: &str, frame_width: u16) -> (u16, u16) {
    let text_width = message.width() as u16;
    let width = text_width
        .saturating_add(HORIZONTAL_PADDING)
        .min(MAX_WIDTH)
        .min(frame_width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);

    (width, lines + 2)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
