//! Value reconciliation between host-owned and self-owned input text

use super::host::SearchHost;

/// Where the input text comes from. Fixed for the lifetime of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// The controller owns the text, optionally seeded with a start value
    Uncontrolled { initial: Option<String> },
    /// The host owns the text; the controller mirrors it
    Controlled(String),
}

impl Default for ValueSource {
    fn default() -> Self {
        ValueSource::Uncontrolled { initial: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    Uncontrolled,
    Controlled,
}

/// Owns the authoritative current text value
#[derive(Debug, Clone)]
pub struct ValueReconciler {
    mode: ValueMode,
    value: String,
    /// Last external value observed in uncontrolled mode, so the same host
    /// value is never re-applied over fresh typing
    last_external: Option<String>,
}

impl ValueReconciler {
    pub fn new(source: ValueSource) -> Self {
        match source {
            ValueSource::Uncontrolled { initial } => Self {
                mode: ValueMode::Uncontrolled,
                value: initial.unwrap_or_default(),
                last_external: None,
            },
            ValueSource::Controlled(value) => Self {
                mode: ValueMode::Controlled,
                value,
                last_external: None,
            },
        }
    }

    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    pub fn current_value(&self) -> &str {
        &self.value
    }

    /// Request a new value. The host always hears about it; only an
    /// uncontrolled reconciler adopts it immediately.
    ///
    /// Returns true if the visible value changed.
    pub fn set_value(&mut self, text: &str, host: &mut dyn SearchHost) -> bool {
        let changed = match self.mode {
            ValueMode::Uncontrolled if self.value != text => {
                self.value = text.to_string();
                true
            }
            _ => false,
        };
        host.on_change(text);
        changed
    }

    /// Observe the host's current value.
    ///
    /// Controlled: any difference is adopted. A withdrawn value (`None`) keeps
    /// the last mirrored text since the mode cannot change.
    ///
    /// Uncontrolled: a newly supplied host value is adopted only if it differs
    /// from the current text; a host value that has not changed since the last
    /// sync leaves typing alone.
    ///
    /// Returns true if the visible value changed.
    pub fn sync_external(&mut self, external: Option<&str>) -> bool {
        match self.mode {
            ValueMode::Controlled => match external {
                Some(v) if v != self.value => {
                    self.value = v.to_string();
                    true
                }
                _ => false,
            },
            ValueMode::Uncontrolled => {
                let Some(v) = external else {
                    self.last_external = None;
                    return false;
                };
                if self.last_external.as_deref() == Some(v) {
                    return false;
                }
                self.last_external = Some(v.to_string());
                if v != self.value {
                    log::debug!("adopting external value over uncontrolled text");
                    self.value = v.to_string();
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod value_tests;
