use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;

pub const TITLE: &str = "Meal Decision Helper";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, input_area, buttons_area, output_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        crate::input::input_render::render_field(self, frame, input_area);
        crate::buttons::buttons_render::render_row(self, frame, buttons_area);
        crate::output::output_render::render_panel(self, frame, output_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }
}
