use std::time::{Duration, Instant};

use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::catalog::CatalogHost;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::search_input::{HostCall, InputEvent, SearchInputController, SearchInputOptions};
use crate::suggestion::Suggestion;

/// Application state
pub struct App {
    pub(super) controller: SearchInputController,
    pub(super) host: CatalogHost,
    pub(super) textarea: TextArea<'static>,
    pub(super) layout_regions: LayoutRegions,
    pub(super) notification: NotificationState,
    /// Most recent suggestion the user picked
    pub(super) last_selection: Option<Suggestion>,
    /// Most recent explicit submit
    pub(super) last_submit: Option<String>,
    should_quit: bool,
    started: Instant,
}

impl App {
    pub fn new(options: SearchInputOptions, host: CatalogHost) -> Self {
        let controller = SearchInputController::new(options);
        let textarea = create_textarea(controller.current_value());

        let mut app = Self {
            controller,
            host,
            textarea,
            layout_regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            last_selection: None,
            last_submit: None,
            should_quit: false,
            started: Instant::now(),
        };
        app.apply_host_updates();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &SearchInputController {
        &self.controller
    }

    pub fn notification_mut(&mut self) -> &mut NotificationState {
        &mut self.notification
    }

    /// Milliseconds since the app started; the controller's clock
    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// How long the event loop may block before the pending search is due
    pub fn poll_timeout(&self, idle: Duration) -> Duration {
        match self.controller.next_deadline() {
            Some(deadline) => Duration::from_millis(deadline.saturating_sub(self.now_ms())).min(idle),
            None => idle,
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        let now = self.now_ms();
        self.dispatch_at(event, now)
    }

    pub fn dispatch_at(&mut self, event: InputEvent, now_ms: u64) -> bool {
        let consumed = self.controller.handle(event, now_ms, &mut self.host);
        self.apply_host_updates();
        consumed
    }

    pub fn tick(&mut self) {
        let now = self.now_ms();
        self.tick_at(now);
    }

    pub fn tick_at(&mut self, now_ms: u64) {
        if self.controller.tick(now_ms, &mut self.host) {
            self.apply_host_updates();
        }
        self.notification.expire(Instant::now());
    }

    /// Drop any pending search before exit
    pub fn shutdown(&mut self) {
        self.controller.dispose();
    }

    /// Feed what the host produced during the last controller call back in:
    /// fresh candidates, the host-owned value, and notifications.
    fn apply_host_updates(&mut self) {
        if let Some(results) = self.host.take_results() {
            self.controller.set_suggestions(results);
        }
        self.controller.sync_external(self.host.external_value());
        self.sync_textarea();

        for call in self.host.drain_calls() {
            self.note_call(call);
        }
    }

    /// Keep the editor showing the controller's value
    pub(super) fn sync_textarea(&mut self) {
        if textarea_text(&self.textarea) != self.controller.current_value() {
            self.textarea = create_textarea(self.controller.current_value());
        }
    }

    fn note_call(&mut self, call: HostCall) {
        match call {
            HostCall::SuggestionSelect { suggestion } => {
                self.notification.show(format!("Selected {}", suggestion.label));
                self.last_selection = Some(suggestion);
            }
            HostCall::Enter { text } => {
                self.notification.show(format!("Searched \"{}\"", text));
                self.last_submit = Some(text);
            }
            HostCall::Clear => self.notification.show("Cleared"),
            _ => {}
        }
    }
}

/// Single-line editor holding `value`, cursor at the end
pub(super) fn create_textarea(value: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.move_cursor(CursorMove::End);
    textarea
}

pub(super) fn textarea_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("")
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
