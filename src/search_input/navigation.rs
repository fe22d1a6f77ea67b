//! Keyboard cursor over the capped suggestion list
//!
//! Tracks which suggestion is active under arrow-key movement. Pointer hover
//! is tracked separately and never moves the keyboard cursor.

/// Keyboard selection state for the suggestion panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Active suggestion index (None = no selection)
    active: Option<usize>,
    /// Suggestion under the pointer, if any
    hovered: Option<usize>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active index into the capped list
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Back to no selection. Called on every value change and list replacement.
    pub fn reset(&mut self) {
        self.active = None;
        self.hovered = None;
    }

    /// Move down, wrapping from the last entry (or no selection) to the first.
    ///
    /// Does nothing on an empty list.
    pub fn move_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.active = match self.active {
            Some(current) if current + 1 < count => Some(current + 1),
            _ => Some(0),
        };
    }

    /// Move up, wrapping from the first entry (or no selection) to the last.
    ///
    /// Does nothing on an empty list.
    pub fn move_up(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.active = match self.active {
            Some(current) if current > 0 && current < count => Some(current - 1),
            _ => Some(count - 1),
        };
    }

    pub fn set_hovered(&mut self, index: Option<usize>, count: usize) {
        self.hovered = index.filter(|&i| i < count);
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
