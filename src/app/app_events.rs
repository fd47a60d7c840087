use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::{Input, Key};

use super::app_state::{App, Focus};

/// How long to wait for input before redrawing, so expired notifications
/// disappear without a key press
const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Wait briefly for one terminal event and apply it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::SuggestButton | Focus::ResetButton => self.handle_button_key(key),
        }
    }

    /// Insert pasted text into the entry field (first line only)
    pub fn handle_paste_event(&mut self, text: String) {
        let line = text.lines().next().unwrap_or_default();
        self.input.textarea.insert_str(line);
        self.focus = Focus::InputField;
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('r') if ctrl => {
                log::debug!("Reset button clicked");
                self.reset();
                true
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                true
            }
            _ => false,
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let input = Input::from(key);

        // Single-line field: line breaks submit instead of reaching the textarea
        if is_line_break(&input) {
            log::debug!("Suggest button clicked");
            self.suggest();
            return;
        }

        self.input.textarea.input(input);
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return;
        }

        match self.focus {
            Focus::SuggestButton => {
                log::debug!("Suggest button clicked");
                self.suggest();
            }
            Focus::ResetButton => {
                log::debug!("Reset button clicked");
                self.reset();
            }
            Focus::InputField => {}
        }
    }
}

/// Enter, or Ctrl+M which the textarea would otherwise turn into a newline
fn is_line_break(input: &Input) -> bool {
    matches!(
        input,
        Input {
            key: Key::Enter,
            ..
        } | Input {
            key: Key::Char('m'),
            ctrl: true,
            ..
        }
    )
}
