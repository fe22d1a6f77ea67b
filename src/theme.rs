//! Color palette, grouped per surface

pub mod input {
    use ratatui::style::Color;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const TEXT: Color = Color::White;
    pub const PLACEHOLDER: Color = Color::DarkGray;
}

pub mod panel {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const ITEM_TEXT: Color = Color::White;
    pub const ITEM_ACTIVE_BG: Color = Color::Cyan;
    pub const ITEM_ACTIVE_FG: Color = Color::Black;
    pub const ITEM_ACTIVE_MODIFIER: Modifier = Modifier::BOLD;
    pub const ITEM_HOVER_BG: Color = Color::Rgb(40, 40, 60);
    pub const MATCH: Color = Color::Yellow;
    pub const MATCH_MODIFIER: Modifier = Modifier::BOLD;
    pub const ICON: Color = Color::Magenta;
    pub const NO_RESULTS: Color = Color::DarkGray;
}

pub mod notification {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Green;
    pub const TEXT: Color = Color::White;
    pub const WARNING_BORDER: Color = Color::Yellow;
    pub const BACKGROUND: Color = Color::Black;
}
