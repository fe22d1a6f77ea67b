//! The search input state machine
//!
//! Composes value reconciliation, debounce scheduling, highlighting,
//! keyboard navigation and panel visibility behind one event entry point.
//! Every transition runs synchronously inside `handle`; the only deferred
//! work is the pending search, which the caller releases through `tick`
//! (or `fire` with a timer token).

use super::debounce::{Debouncer, TimerToken};
use super::event::{InputEvent, NavKey};
use super::highlight::{self, PresentedSuggestion};
use super::host::SearchHost;
use super::navigation::NavigationState;
use super::value::{ValueMode, ValueReconciler, ValueSource};
use super::visibility::VisibilityState;
use super::{DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_SUGGESTIONS};
use crate::suggestion::Suggestion;

/// Construction-time options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputOptions {
    pub value: ValueSource,
    pub debounce_ms: u64,
    pub max_suggestions: usize,
    /// Only search on Enter or explicit submit, never on a timer
    pub search_on_submit_only: bool,
    /// Whether this input shows a suggestion panel at all
    pub show_suggestions: bool,
}

impl Default for SearchInputOptions {
    fn default() -> Self {
        Self {
            value: ValueSource::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            search_on_submit_only: false,
            show_suggestions: true,
        }
    }
}

/// Everything a renderer needs to draw the input and its panel
#[derive(Debug, Clone, PartialEq)]
pub struct SearchInputView<'a> {
    pub value: &'a str,
    pub focused: bool,
    pub panel_visible: bool,
    /// Capped and highlighted candidates
    pub suggestions: Vec<PresentedSuggestion<'a>>,
    pub active_index: Option<usize>,
    pub hovered_index: Option<usize>,
    /// Panel is open for a non-empty query that has no candidates
    pub show_no_results: bool,
}

pub struct SearchInputController {
    value: ValueReconciler,
    debouncer: Debouncer,
    suggestions: Vec<Suggestion>,
    navigation: NavigationState,
    visibility: VisibilityState,
    max_suggestions: usize,
    focused: bool,
}

impl SearchInputController {
    pub fn new(options: SearchInputOptions) -> Self {
        Self {
            value: ValueReconciler::new(options.value),
            debouncer: Debouncer::new(options.debounce_ms, options.search_on_submit_only),
            suggestions: Vec::new(),
            navigation: NavigationState::new(),
            visibility: VisibilityState::new(options.show_suggestions),
            max_suggestions: options.max_suggestions,
            focused: false,
        }
    }

    pub fn current_value(&self) -> &str {
        self.value.current_value()
    }

    pub fn value_mode(&self) -> ValueMode {
        self.value.mode()
    }

    pub fn panel_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.navigation.active()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.navigation.hovered()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The full list last supplied by the host, before capping
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn capped_len(&self) -> usize {
        highlight::capped_len(self.suggestions.len(), self.max_suggestions)
    }

    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.debouncer.pending_token()
    }

    /// Time at which the pending search becomes due, for sizing event-loop waits
    pub fn next_deadline(&self) -> Option<u64> {
        self.debouncer.next_deadline()
    }

    pub fn view(&self) -> SearchInputView<'_> {
        let query = self.current_value();
        let suggestions = highlight::present(&self.suggestions, query, self.max_suggestions);
        let panel_visible = self.panel_visible();
        let show_no_results = panel_visible && suggestions.is_empty() && !query.is_empty();

        SearchInputView {
            value: query,
            focused: self.focused,
            panel_visible,
            suggestions,
            active_index: self.navigation.active(),
            hovered_index: self.navigation.hovered(),
            show_no_results,
        }
    }

    /// Replace the candidate list wholesale. Any keyboard selection is dropped,
    /// even if it would still be in range.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.navigation.reset();
    }

    /// Observe the host's value for this input. Returns true if the visible
    /// value changed.
    pub fn sync_external(&mut self, external: Option<&str>) -> bool {
        let changed = self.value.sync_external(external);
        if changed {
            self.navigation.reset();
        }
        changed
    }

    /// Apply one event. Returns true if the event was consumed.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64, host: &mut dyn SearchHost) -> bool {
        match event {
            InputEvent::Input(text) => {
                self.on_input(&text, now_ms, host);
                true
            }
            InputEvent::Key(key) => self.on_key(key, host),
            InputEvent::Focus => {
                self.focused = true;
                host.on_focus();
                let has_candidates = self.capped_len() > 0;
                let has_query = !self.current_value().is_empty();
                self.visibility.on_focus(has_candidates, has_query);
                true
            }
            InputEvent::Blur => {
                self.focused = false;
                host.on_blur();
                true
            }
            InputEvent::PointerDown { inside: true } => false,
            InputEvent::PointerDown { inside: false } => {
                let was_visible = self.panel_visible();
                self.visibility.on_outside_interaction();
                self.navigation.reset();
                if was_visible {
                    log::debug!("suggestion panel dismissed by outside interaction");
                }
                was_visible
            }
            InputEvent::Hover(index) => {
                self.navigation.set_hovered(index, self.capped_len());
                true
            }
            InputEvent::Select(index) => self.panel_visible() && self.commit(index, host),
            InputEvent::Clear => {
                self.clear(host);
                true
            }
            InputEvent::Submit => {
                self.submit(host);
                true
            }
        }
    }

    /// Release the pending search if it is due at `now_ms`
    pub fn tick(&mut self, now_ms: u64, host: &mut dyn SearchHost) -> bool {
        match self.debouncer.poll(now_ms) {
            Some(text) => {
                host.on_search(&text);
                true
            }
            None => false,
        }
    }

    /// Release the pending search by token. Stale tokens do nothing.
    pub fn fire(&mut self, token: TimerToken, host: &mut dyn SearchHost) -> bool {
        match self.debouncer.fire(token) {
            Some(text) => {
                host.on_search(&text);
                true
            }
            None => false,
        }
    }

    /// Tear down for unmount. The pending search is cancelled so it can never
    /// reach the host.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.visibility.close();
        self.navigation.reset();
        self.focused = false;
    }

    fn on_input(&mut self, text: &str, now_ms: u64, host: &mut dyn SearchHost) {
        self.value.set_value(text, host);
        self.navigation.reset();
        self.debouncer.notify_changed(text, now_ms);
        self.visibility.on_typing();
    }

    fn on_key(&mut self, key: NavKey, host: &mut dyn SearchHost) -> bool {
        match key {
            NavKey::Down | NavKey::Up => {
                let count = self.capped_len();
                if !self.panel_visible() || count == 0 {
                    return false;
                }
                if key == NavKey::Down {
                    self.navigation.move_down(count);
                } else {
                    self.navigation.move_up(count);
                }
                true
            }
            NavKey::Enter => {
                match self.navigation.active() {
                    Some(index) if self.panel_visible() => {
                        self.commit(index, host);
                    }
                    _ => self.submit(host),
                }
                true
            }
            NavKey::Escape => {
                let was_visible = self.visibility.close();
                self.navigation.reset();
                was_visible
            }
        }
    }

    /// Commit a capped suggestion into the value and close the panel
    fn commit(&mut self, index: usize, host: &mut dyn SearchHost) -> bool {
        if index >= self.capped_len() {
            return false;
        }
        let suggestion = self.suggestions[index].clone();

        log::debug!("committing suggestion {} ({})", suggestion.id, suggestion.label);
        self.debouncer.cancel();
        self.value.set_value(&suggestion.value, host);
        host.on_suggestion_select(&suggestion);
        self.visibility.close();
        self.navigation.reset();
        true
    }

    /// Search now with the current value, skipping any debounce wait
    fn submit(&mut self, host: &mut dyn SearchHost) {
        self.debouncer.cancel();
        let text = self.current_value().to_string();

        log::debug!("explicit submit of {:?}", text);
        host.on_search(&text);
        host.on_enter(&text);
        self.visibility.close();
        self.navigation.reset();
    }

    fn clear(&mut self, host: &mut dyn SearchHost) {
        self.debouncer.cancel();
        self.value.set_value("", host);
        self.navigation.reset();
        // Cleared field reopens on whatever candidates the host still shows
        self.visibility.close();
        self.visibility.on_focus(self.capped_len() > 0, false);
        self.focused = true;
        host.on_search("");
        host.on_clear();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
