//! Mouse handling
//!
//! Clicks focus the field, pick suggestions, or dismiss the panel; movement
//! over the panel updates the hover highlight.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app::App;
use crate::layout::{self, Region};
use crate::search_input::InputEvent;

impl App {
    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = layout::region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(region, mouse),
            MouseEventKind::Moved => self.handle_hover(region, mouse),
            _ => {}
        }
    }

    fn handle_click(&mut self, region: Option<Region>, mouse: MouseEvent) {
        match region {
            Some(Region::InputField) => {
                self.dispatch(InputEvent::PointerDown { inside: true });
                if !self.controller.is_focused() {
                    self.dispatch(InputEvent::Focus);
                }
            }
            Some(Region::SuggestionPanel) => {
                self.dispatch(InputEvent::PointerDown { inside: true });
                if let Some(index) = self.suggestion_under(mouse) {
                    self.dispatch(InputEvent::Select(index));
                }
            }
            None => {
                self.dispatch(InputEvent::PointerDown { inside: false });
                if self.controller.is_focused() {
                    self.dispatch(InputEvent::Blur);
                }
            }
        }
    }

    fn handle_hover(&mut self, region: Option<Region>, mouse: MouseEvent) {
        let index = match region {
            Some(Region::SuggestionPanel) => self.suggestion_under(mouse),
            _ => None,
        };
        if index != self.controller.hovered_index() {
            self.dispatch(InputEvent::Hover(index));
        }
    }

    /// Capped suggestion index under the pointer
    fn suggestion_under(&self, mouse: MouseEvent) -> Option<usize> {
        layout::suggestion_row_at(&self.layout_regions, mouse.column, mouse.row)
            .filter(|&row| row < self.controller.capped_len())
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
