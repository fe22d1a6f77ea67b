//! Autocomplete search input
//!
//! A rendering-independent controller for a text field with debounced
//! search, a capped and highlighted suggestion panel, keyboard navigation,
//! and escape/outside-click dismissal. Surfaces feed it [`InputEvent`]s and
//! draw its [`SearchInputView`]; the host hears about changes through
//! [`SearchHost`].

mod controller;
mod debounce;
mod event;
mod highlight;
mod host;
mod navigation;
mod value;
mod visibility;

pub use controller::{SearchInputController, SearchInputOptions, SearchInputView};
pub use debounce::{Debouncer, TimerToken};
pub use event::{InputEvent, NavKey};
pub use highlight::{PresentedSuggestion, Segment, capped_len, highlight, present};
pub use host::{Callbacks, HostCall, RecordingHost, SearchHost};
pub use navigation::NavigationState;
pub use value::{ValueMode, ValueReconciler, ValueSource};
pub use visibility::VisibilityState;

/// Default quiet period before a search is dispatched
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default number of suggestions shown in the panel
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
