use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::theme;
use crate::widgets::popup;

const NOTIFICATION_HEIGHT: u16 = 3;
const NOTIFICATION_MARGIN: u16 = 1;

/// Render the current notification in the top-right corner of `area`
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let width = u16::try_from(notification.message.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let notification_area = popup::popup_top_right(area, width, NOTIFICATION_HEIGHT, NOTIFICATION_MARGIN);

    let border = match notification.kind {
        NotificationKind::Info => theme::notification::BORDER,
        NotificationKind::Warning => theme::notification::WARNING_BORDER,
    };

    popup::clear_area(frame, notification_area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", notification.message),
        Style::default().fg(theme::notification::TEXT),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme::notification::BACKGROUND)),
    );

    frame.render_widget(paragraph, notification_area);
}
