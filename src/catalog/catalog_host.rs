use crate::search_input::{HostCall, SearchHost};
use crate::suggestion::Suggestion;

use super::Catalog;

/// Host backed by a [`Catalog`]
///
/// Answers every search with a fresh candidate list that the surface hands
/// back to the controller after the event completes. In controlled mode it
/// also owns the field's value and echoes requested changes back.
#[derive(Debug)]
pub struct CatalogHost {
    catalog: Catalog,
    results: Option<Vec<Suggestion>>,
    /// Value the host holds for the field, if any
    value: Option<String>,
    /// Typing is echoed into `value`
    controlled: bool,
    calls: Vec<HostCall>,
}

impl CatalogHost {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            results: None,
            value: None,
            controlled: false,
            calls: Vec::new(),
        }
    }

    /// Host that owns the field's value, starting from `initial`
    pub fn controlled(catalog: Catalog, initial: impl Into<String>) -> Self {
        Self {
            value: Some(initial.into()),
            controlled: true,
            ..Self::new(catalog)
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Value to feed back to the controller, if the host owns it
    pub fn external_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the host-held value, as a parent component pushing a new value would
    pub fn set_external_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Candidates produced by the last search, once
    pub fn take_results(&mut self) -> Option<Vec<Suggestion>> {
        self.results.take()
    }

    /// Callbacks received since the last drain, oldest first
    pub fn drain_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl SearchHost for CatalogHost {
    fn on_change(&mut self, text: &str) {
        if self.controlled {
            self.value = Some(text.to_string());
        }
        self.calls.push(HostCall::Change {
            text: text.to_string(),
        });
    }

    fn on_search(&mut self, text: &str) {
        let results = self.catalog.search(text);
        log::debug!("catalog answered {:?} with {} candidates", text, results.len());
        self.results = Some(results);
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
