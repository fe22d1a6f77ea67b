use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, textarea_text};
use crate::search_input::{InputEvent, NavKey};

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            Event::FocusLost => {
                if self.controller.is_focused() {
                    self.dispatch(InputEvent::Blur);
                }
            }
            _ => {}
        }
    }

    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up => {
                self.dispatch(InputEvent::Key(NavKey::Up));
            }
            KeyCode::Down => {
                self.dispatch(InputEvent::Key(NavKey::Down));
            }
            KeyCode::Enter => {
                self.dispatch(InputEvent::Key(NavKey::Enter));
            }
            // The editor would insert a newline for these
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {
                self.dispatch(InputEvent::Key(NavKey::Enter));
            }
            KeyCode::Esc => {
                // A second Escape leaves the field
                if !self.dispatch(InputEvent::Key(NavKey::Escape)) && self.controller.is_focused() {
                    self.dispatch(InputEvent::Blur);
                }
            }
            KeyCode::Tab => {
                if self.controller.is_focused() {
                    self.dispatch(InputEvent::Blur);
                }
            }
            KeyCode::BackTab => {
                if !self.controller.is_focused() {
                    self.dispatch(InputEvent::Focus);
                }
            }
            _ => self.handle_text_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char('u') => {
                self.dispatch(InputEvent::Clear);
                true
            }
            _ => false,
        }
    }

    /// Editing keys go to the text editor; a changed text becomes an input event
    fn handle_text_key(&mut self, key: KeyEvent) {
        if !self.controller.is_focused() {
            if !matches!(key.code, KeyCode::Char(_)) {
                return;
            }
            self.dispatch(InputEvent::Focus);
        }

        let before = textarea_text(&self.textarea);
        self.textarea.input(key);
        self.commit_editor_text(before);
    }

    fn handle_paste(&mut self, text: &str) {
        if !self.controller.is_focused() {
            self.dispatch(InputEvent::Focus);
        }

        let before = textarea_text(&self.textarea);
        // Single-line field
        self.textarea.insert_str(text.replace(['\r', '\n'], " "));
        self.commit_editor_text(before);
    }

    fn commit_editor_text(&mut self, before: String) {
        let after = textarea_text(&self.textarea);
        if after != before {
            self.dispatch(InputEvent::Input(after));
        } else {
            self.sync_textarea();
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
