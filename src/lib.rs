//! quicksearch: an autocomplete search input
//!
//! The [`search_input`] controller is independent of any rendering surface.
//! Two surfaces drive it: a ratatui terminal UI ([`tui`]) and a headless
//! JSON-lines runner ([`script`]).

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod script;
pub mod search_input;
pub mod suggestion;
pub mod theme;
pub mod tui;
pub mod widgets;

pub use error::SearchError;
pub use search_input::{InputEvent, NavKey, SearchHost, SearchInputController, SearchInputOptions};
pub use suggestion::{Suggestion, SuggestionId};
