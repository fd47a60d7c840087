//! Suggestion panel rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the suggestion panel. Nothing is drawn while the output is hidden.
pub fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let Some(text) = app.controller.state().visible_output() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestion ")
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{app_with_input, render_to_string};

    #[test]
    fn test_hidden_output_draws_nothing() {
        let app = app_with_input("morning");

        let output = render_to_string(60, 5, |f| {
            let area = f.area();
            render_panel(&app, f, area)
        });

        assert!(!output.contains("Suggestion"));
        assert!(!output.contains("Breakfast"));
    }

    #[test]
    fn test_visible_output_shows_suggestion() {
        let mut app = app_with_input("mid-afternoon");
        app.suggest();

        let output = render_to_string(80, 5, |f| {
            let area = f.area();
            render_panel(&app, f, area)
        });

        assert!(output.contains("Suggestion"));
        assert!(output.contains("Afternoon snack: Banana with almond butter"));
    }

    #[test]
    fn test_long_suggestion_wraps_in_narrow_panel() {
        let mut app = app_with_input("morning");
        app.suggest();

        let output = render_to_string(30, 8, |f| {
            let area = f.area();
            render_panel(&app, f, area)
        });

        assert!(output.contains("Breakfast:"));
        assert!(output.contains("orange"));
    }
}
