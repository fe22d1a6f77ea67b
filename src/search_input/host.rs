//! Host callback seam
//!
//! The controller never owns I/O. Everything it wants the outside world to
//! know goes through a [`SearchHost`]. Panics raised inside a callback are not
//! caught: they unwind out of the event that triggered them.

use serde::Serialize;

use crate::suggestion::Suggestion;

/// Callbacks the controller invokes on the host. All methods default to no-ops.
pub trait SearchHost {
    fn on_change(&mut self, _text: &str) {}
    fn on_search(&mut self, _text: &str) {}
    fn on_clear(&mut self) {}
    fn on_suggestion_select(&mut self, _suggestion: &Suggestion) {}
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
    fn on_enter(&mut self, _text: &str) {}
}

type TextHandler<'a> = Box<dyn FnMut(&str) + 'a>;
type UnitHandler<'a> = Box<dyn FnMut() + 'a>;
type SelectHandler<'a> = Box<dyn FnMut(&Suggestion) + 'a>;

/// Host assembled from individual closures
///
/// ```
/// use quicksearch::search_input::Callbacks;
///
/// let mut searched = Vec::new();
/// {
///     let mut host = Callbacks::new().search(|text| searched.push(text.to_string()));
///     quicksearch::search_input::SearchHost::on_search(&mut host, "team");
/// }
/// assert_eq!(searched, vec!["team"]);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    change: Option<TextHandler<'a>>,
    search: Option<TextHandler<'a>>,
    clear: Option<UnitHandler<'a>>,
    select: Option<SelectHandler<'a>>,
    focus: Option<UnitHandler<'a>>,
    blur: Option<UnitHandler<'a>>,
    enter: Option<TextHandler<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.change = Some(Box::new(f));
        self
    }

    pub fn search(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.search = Some(Box::new(f));
        self
    }

    pub fn clear(mut self, f: impl FnMut() + 'a) -> Self {
        self.clear = Some(Box::new(f));
        self
    }

    pub fn select(mut self, f: impl FnMut(&Suggestion) + 'a) -> Self {
        self.select = Some(Box::new(f));
        self
    }

    pub fn focus(mut self, f: impl FnMut() + 'a) -> Self {
        self.focus = Some(Box::new(f));
        self
    }

    pub fn blur(mut self, f: impl FnMut() + 'a) -> Self {
        self.blur = Some(Box::new(f));
        self
    }

    pub fn enter(mut self, f: impl FnMut(&str) + 'a) -> Self {
        self.enter = Some(Box::new(f));
        self
    }
}

impl SearchHost for Callbacks<'_> {
    fn on_change(&mut self, text: &str) {
        if let Some(f) = self.change.as_mut() {
            f(text);
        }
    }

    fn on_search(&mut self, text: &str) {
        if let Some(f) = self.search.as_mut() {
            f(text);
        }
    }

    fn on_clear(&mut self) {
        if let Some(f) = self.clear.as_mut() {
            f();
        }
    }

    fn on_suggestion_select(&mut self, suggestion: &Suggestion) {
        if let Some(f) = self.select.as_mut() {
            f(suggestion);
        }
    }

    fn on_focus(&mut self) {
        if let Some(f) = self.focus.as_mut() {
            f();
        }
    }

    fn on_blur(&mut self) {
        if let Some(f) = self.blur.as_mut() {
            f();
        }
    }

    fn on_enter(&mut self, text: &str) {
        if let Some(f) = self.enter.as_mut() {
            f(text);
        }
    }
}

/// One recorded callback invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "callback", rename_all = "snake_case")]
pub enum HostCall {
    Change { text: String },
    Search { text: String },
    Clear,
    SuggestionSelect { suggestion: Suggestion },
    Focus,
    Blur,
    Enter { text: String },
}

/// Host that records every callback in invocation order
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts passed to `on_search`, oldest first
    pub fn searches(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Search { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts passed to `on_change`, oldest first
    pub fn changes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Change { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn selections(&self) -> Vec<&Suggestion> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SuggestionSelect { suggestion } => Some(suggestion),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|&c| pred(c)).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl SearchHost for RecordingHost {
    fn on_change(&mut self, text: &str) {
        self.calls.push(HostCall::Change {
            text: text.to_string(),
        });
    }

    fn on_search(&mut self, text: &str) {
        self.calls.push(HostCall::Search {
            text: text.to_string(),
        });
    }

    fn on_clear(&mut self) {
        self.calls.push(HostCall::Clear);
    }

    fn on_suggestion_select(&mut self, suggestion: &Suggestion) {
        self.calls.push(HostCall::SuggestionSelect {
            suggestion: suggestion.clone(),
        });
    }

    fn on_focus(&mut self) {
        self.calls.push(HostCall::Focus);
    }

    fn on_blur(&mut self) {
        self.calls.push(HostCall::Blur);
    }

    fn on_enter(&mut self, text: &str) {
        self.calls.push(HostCall::Enter {
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
