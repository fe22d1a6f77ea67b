//! Frame rendering
//!
//! Input field on top, a selection summary below it, and a key hint line.
//! The suggestion panel is drawn over the summary, directly under the input.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::App;
use crate::notification::render_notification;
use crate::search_input::{PresentedSuggestion, SearchInputView, ValueMode};
use crate::theme;
use crate::widgets::popup;

const INPUT_HEIGHT: u16 = 3;
const PANEL_BORDER_HEIGHT: u16 = 2;
const PANEL_OFFSET_X: u16 = 1;
const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";
const NO_RESULTS: &str = "No results";
const PLACEHOLDER: &str = "Search teams, projects, notifications...";
const KEY_HINTS: &str = " ↑/↓ navigate  Enter select  Esc close  Ctrl+U clear  Ctrl+C quit ";

impl App {
    /// Render the UI and record component regions for mouse hit testing
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        let input_area = layout[0];
        let body_area = layout[1];
        let hint_area = layout[2];

        self.layout_regions.clear();
        self.layout_regions.input_field = Some(input_area);

        self.render_input(frame, input_area);
        self.render_summary(frame, body_area);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );

        let view = self.controller.view();
        if let Some((panel_area, scroll)) = render_panel(frame, &view, input_area, area) {
            self.layout_regions.suggestion_panel = Some(panel_area);
            self.layout_regions.suggestion_scroll = scroll;
        }

        render_notification(frame, &self.notification, area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.controller.is_focused();
        let border = if focused {
            theme::input::BORDER_FOCUSED
        } else {
            theme::input::BORDER_UNFOCUSED
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border)),
        );
        self.textarea.set_style(Style::default().fg(theme::input::TEXT));
        self.textarea.set_placeholder_text(PLACEHOLDER);
        self.textarea
            .set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
        // Hide the cursor while the field is not focused
        self.textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        frame.render_widget(&self.textarea, area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.controller.value_mode() {
            ValueMode::Uncontrolled => "uncontrolled",
            ValueMode::Controlled => "controlled",
        };
        let selection = match &self.last_selection {
            Some(s) => format!("{} ({}, id {})", s.label, s.value, s.id),
            None => "none".to_string(),
        };
        let submit = self.last_submit.as_deref().unwrap_or("none");

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![Span::styled("Mode:        ", label), Span::raw(mode)]),
            Line::from(vec![
                Span::styled("Value:       ", label),
                Span::raw(self.controller.current_value().to_string()),
            ]),
            Line::from(vec![Span::styled("Selected:    ", label), Span::raw(selection)]),
            Line::from(vec![
                Span::styled("Last submit: ", label),
                Span::raw(submit.to_string()),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Selection ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }
}

/// Draw the suggestion panel under the input.
///
/// Returns the area it occupies and the index of its first visible row. A
/// panel clipped by the terminal scrolls to keep the active row in view.
fn render_panel(
    frame: &mut Frame,
    view: &SearchInputView<'_>,
    input_area: Rect,
    bounds: Rect,
) -> Option<(Rect, usize)> {
    if !view.panel_visible || (view.suggestions.is_empty() && !view.show_no_results) {
        return None;
    }

    let rows = u16::try_from(view.suggestions.len().max(1)).unwrap_or(u16::MAX);
    let width = input_area.width.saturating_sub(PANEL_OFFSET_X * 2);
    let panel_area = popup::popup_below_anchor(
        input_area,
        bounds,
        width,
        rows.saturating_add(PANEL_BORDER_HEIGHT),
        PANEL_OFFSET_X,
    );
    if panel_area.height <= PANEL_BORDER_HEIGHT {
        return None;
    }

    let items: Vec<ListItem> = if view.suggestions.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            format!("{}{}", INACTIVE_MARKER, NO_RESULTS),
            Style::default()
                .fg(theme::panel::NO_RESULTS)
                .add_modifier(Modifier::ITALIC),
        )))]
    } else {
        let inner_width = panel_area.width.saturating_sub(2) as usize;
        view.suggestions
            .iter()
            .map(|item| suggestion_item(item, view, inner_width))
            .collect()
    };

    // Clear the background area to prevent transparency
    popup::clear_area(frame, panel_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(theme::panel::BORDER))
            .style(Style::default().bg(theme::panel::BACKGROUND)),
    );
    let mut state = ListState::default().with_selected(view.active_index);
    frame.render_stateful_widget(list, panel_area, &mut state);

    Some((panel_area, state.offset()))
}

fn suggestion_item<'a>(item: &PresentedSuggestion<'a>, view: &SearchInputView<'_>, width: usize) -> ListItem<'a> {
    let active = view.active_index == Some(item.index);
    let hovered = view.hovered_index == Some(item.index);

    let row = if active {
        Style::default()
            .fg(theme::panel::ITEM_ACTIVE_FG)
            .bg(theme::panel::ITEM_ACTIVE_BG)
            .add_modifier(theme::panel::ITEM_ACTIVE_MODIFIER)
    } else if hovered {
        Style::default()
            .fg(theme::panel::ITEM_TEXT)
            .bg(theme::panel::ITEM_HOVER_BG)
    } else {
        Style::default()
            .fg(theme::panel::ITEM_TEXT)
            .bg(theme::panel::BACKGROUND)
    };
    let matched = if active {
        row.add_modifier(Modifier::UNDERLINED)
    } else {
        row.fg(theme::panel::MATCH)
            .add_modifier(theme::panel::MATCH_MODIFIER)
    };

    let mut spans = vec![Span::styled(if active { ACTIVE_MARKER } else { INACTIVE_MARKER }, row)];
    if let Some(icon) = &item.suggestion.icon {
        let icon_style = if active { row } else { row.fg(theme::panel::ICON) };
        spans.push(Span::styled(format!("{} ", icon), icon_style));
    }
    for segment in &item.segments {
        spans.push(Span::styled(segment.text, if segment.matched { matched } else { row }));
    }

    // Fill the rest of the row so the background covers the full width
    let used: usize = spans.iter().map(|span| span.width()).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), row));
    }

    ListItem::new(Line::from(spans))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
