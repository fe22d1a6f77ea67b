use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, left-aligned with it plus `x_offset`.
///
/// Width and height are clamped so the popup stays inside `bounds`.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = (anchor.x + x_offset).min(bounds.right());
    let popup_y = anchor.bottom().min(bounds.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(bounds.right().saturating_sub(popup_x)),
        height: height.min(bounds.bottom().saturating_sub(popup_y)),
    }
}

/// Area in the top-right corner of `bounds`, `margin` cells in from both edges
pub fn popup_top_right(bounds: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(bounds.width.saturating_sub(margin * 2));
    let height = height.min(bounds.height.saturating_sub(margin));

    Rect {
        x: bounds.x + bounds.width.saturating_sub(width + margin),
        y: bounds.y + margin.min(bounds.height),
        width,
        height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
