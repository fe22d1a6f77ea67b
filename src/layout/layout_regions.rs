use ratatui::layout::Rect;

/// Components that react to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SuggestionPanel,
}

/// Where each component was drawn in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    /// Outer rect of the panel, borders included. `None` while hidden.
    pub suggestion_panel: Option<Rect>,
    /// Index of the suggestion drawn on the panel's first row
    pub suggestion_scroll: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
