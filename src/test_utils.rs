#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use ratatui::Frame;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn app_with_input(text: &str) -> App {
        let mut app = test_app();
        app.input.textarea.insert_str(text);
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Feed each character of `text` to the app as a key press
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Draw with a TestBackend and return the buffer as text
    pub fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().to_string()
    }
}
