//! Suggestion panel visibility
//!
//! The panel opens on focus (when there is something to show) or on typing,
//! and closes only on an explicit action or an interaction outside both the
//! input and the panel. Losing focus alone keeps it open, so a click on a
//! suggestion that briefly blurs the input still lands.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityState {
    /// Whether this input shows suggestions at all
    enabled: bool,
    visible: bool,
}

impl VisibilityState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            visible: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Field gained focus. Opens when there are candidates to list or a query
    /// to report "no results" for.
    pub fn on_focus(&mut self, has_candidates: bool, has_query: bool) {
        if self.enabled && (has_candidates || has_query) {
            self.visible = true;
        }
    }

    pub fn on_typing(&mut self) {
        if self.enabled {
            self.visible = true;
        }
    }

    /// Pointer or focus event outside the input and panel
    pub fn on_outside_interaction(&mut self) {
        self.close();
    }

    /// Selection, submit, escape or clear. Returns whether the panel was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}
