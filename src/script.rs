//! Headless surface driven by a JSON-lines script
//!
//! Each line is one step: an optional `at` timestamp in milliseconds plus an
//! event. Before a step is applied, any search due at its timestamp fires.
//! Every host callback is written out as one JSON line, followed at the end
//! by a snapshot of the input's state.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogHost};
use crate::error::SearchError;
use crate::search_input::{InputEvent, NavKey, SearchInputController, SearchInputOptions, ValueSource};
use crate::suggestion::Suggestion;

#[derive(Debug, Deserialize)]
struct ScriptStep {
    #[serde(default)]
    at: Option<u64>,
    #[serde(flatten)]
    event: ScriptEvent,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    Focus,
    Blur,
    Input { text: String },
    Key { key: NavKey },
    Pointer { inside: bool },
    Hover { index: Option<usize> },
    Select { index: usize },
    Clear,
    Submit,
    /// Only advances the clock
    Tick,
    /// Host replaces the candidate list
    Suggestions { items: Vec<Suggestion> },
    /// Host pushes a new value for the field
    External { value: Option<String> },
}

#[derive(Debug, Serialize)]
struct StateLine<'a> {
    state: FinalState<'a>,
}

#[derive(Debug, Serialize)]
struct FinalState<'a> {
    value: &'a str,
    panel_visible: bool,
    active_index: Option<usize>,
    /// Labels of the capped list the panel would show
    suggestions: Vec<&'a str>,
}

/// How to set up the scripted input
#[derive(Debug, Default)]
pub struct ScriptOptions {
    pub input: SearchInputOptions,
    /// Answers searches when present; otherwise candidates only come from
    /// `suggestions` steps
    pub catalog: Option<Catalog>,
}

struct ScriptSession {
    controller: SearchInputController,
    host: CatalogHost,
    use_catalog_results: bool,
}

impl ScriptSession {
    fn new(options: ScriptOptions) -> Self {
        let use_catalog_results = options.catalog.is_some();
        let catalog = options.catalog.unwrap_or_else(|| Catalog::new(Vec::new()));
        let host = match &options.input.value {
            ValueSource::Controlled(value) => CatalogHost::controlled(catalog, value.clone()),
            ValueSource::Uncontrolled { .. } => CatalogHost::new(catalog),
        };

        Self {
            controller: SearchInputController::new(options.input),
            host,
            use_catalog_results,
        }
    }

    fn tick(&mut self, now_ms: u64) {
        if self.controller.tick(now_ms, &mut self.host) {
            self.apply_host_updates();
        }
    }

    fn apply(&mut self, event: ScriptEvent, now_ms: u64) {
        let input = match event {
            ScriptEvent::Focus => InputEvent::Focus,
            ScriptEvent::Blur => InputEvent::Blur,
            ScriptEvent::Input { text } => InputEvent::Input(text),
            ScriptEvent::Key { key } => InputEvent::Key(key),
            ScriptEvent::Pointer { inside } => InputEvent::PointerDown { inside },
            ScriptEvent::Hover { index } => InputEvent::Hover(index),
            ScriptEvent::Select { index } => InputEvent::Select(index),
            ScriptEvent::Clear => InputEvent::Clear,
            ScriptEvent::Submit => InputEvent::Submit,
            ScriptEvent::Tick => return,
            ScriptEvent::Suggestions { items } => {
                self.controller.set_suggestions(items);
                return;
            }
            ScriptEvent::External { value } => {
                self.host.set_external_value(value);
                self.apply_host_updates();
                return;
            }
        };

        self.controller.handle(input, now_ms, &mut self.host);
        self.apply_host_updates();
    }

    fn apply_host_updates(&mut self) {
        if let Some(results) = self.host.take_results() {
            if self.use_catalog_results {
                self.controller.set_suggestions(results);
            }
        }
        self.controller.sync_external(self.host.external_value());
    }

    /// Write callbacks received while processing `line`
    fn flush(&mut self, out: &mut impl Write, line: usize) -> Result<(), SearchError> {
        for call in self.host.drain_calls() {
            write_json(out, &call, line)?;
        }
        Ok(())
    }

    fn finish(mut self, out: &mut impl Write, line: usize) -> Result<(), SearchError> {
        {
            let view = self.controller.view();
            let state = StateLine {
                state: FinalState {
                    value: view.value,
                    panel_visible: view.panel_visible,
                    active_index: view.active_index,
                    suggestions: view.suggestions.iter().map(|s| s.suggestion.label.as_str()).collect(),
                },
            };
            write_json(out, &state, line)?;
        }

        self.controller.dispose();
        Ok(())
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, line: usize) -> Result<(), SearchError> {
    let json = serde_json::to_string(value).map_err(|e| SearchError::Script {
        line,
        message: e.to_string(),
    })?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Run a script read from `reader`, writing callback and state lines to `out`
pub fn run_script(reader: impl BufRead, mut out: impl Write, options: ScriptOptions) -> Result<(), SearchError> {
    let mut session = ScriptSession::new(options);
    let mut now: u64 = 0;
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let step: ScriptStep = serde_json::from_str(trimmed).map_err(|e| SearchError::Script {
            line: line_no,
            message: e.to_string(),
        })?;

        if let Some(at) = step.at {
            if at < now {
                return Err(SearchError::Script {
                    line: line_no,
                    message: format!("timestamp {} is earlier than previous step at {}", at, now),
                });
            }
            now = at;
        }

        log::debug!("script line {} at {}ms: {:?}", line_no, now, step.event);
        session.tick(now);
        session.apply(step.event, now);
        session.flush(&mut out, line_no)?;
    }

    session.finish(&mut out, last_line)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod script_tests;
