//! Events a rendering surface feeds into the controller

use serde::Deserialize;

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The field's text changed to the given value (one keystroke, paste, ...)
    Input(String),
    Key(NavKey),
    Focus,
    Blur,
    /// Pointer pressed; `inside` is true when it hit the input or the panel
    PointerDown { inside: bool },
    /// Pointer moved over a capped suggestion index, or off the list
    Hover(Option<usize>),
    /// Pointer click on a capped suggestion index
    Select(usize),
    Clear,
    Submit,
}
