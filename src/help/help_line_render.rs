use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

/// Render the key binding hints (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = help_text(app.focus);

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::InputField => " Enter: Suggest | Ctrl+R: Reset | Tab: Next | Esc: Quit",
        Focus::SuggestButton | Focus::ResetButton => {
            " Enter/Space: Press | Ctrl+R: Reset | Tab: Next | Esc: Quit"
        }
    }
}
