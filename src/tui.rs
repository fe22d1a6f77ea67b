//! Terminal surface for the search input
//!
//! Drives one [`SearchInputController`](crate::search_input::SearchInputController)
//! from crossterm events and draws it with ratatui. Search results come from a
//! [`CatalogHost`](crate::catalog::CatalogHost) and are handed back to the
//! controller once each event has been fully processed.

mod app;
mod events;
mod mouse;
mod render;

use std::time::Duration;

use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

pub use app::App;

/// Longest wait for input when no search is pending
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Run the event loop until the user quits
pub fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(IDLE_POLL))? {
            app.handle_event(event::read()?);
        }

        app.tick();
    }

    app.shutdown();
    Ok(())
}
