//! Suggestion records supplied by the host
//!
//! A suggestion is opaque to the search input: it only reads the label for
//! display and the value for committing a selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a suggestion, unique within the current list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionId::Number(n) => write!(f, "{}", n),
            SuggestionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for SuggestionId {
    fn from(n: i64) -> Self {
        SuggestionId::Number(n)
    }
}

impl From<i32> for SuggestionId {
    fn from(n: i32) -> Self {
        SuggestionId::Number(i64::from(n))
    }
}

impl From<&str> for SuggestionId {
    fn from(s: &str) -> Self {
        SuggestionId::Text(s.to_string())
    }
}

impl From<String> for SuggestionId {
    fn from(s: String) -> Self {
        SuggestionId::Text(s)
    }
}

/// A single candidate shown in the suggestion panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    /// Text displayed (and highlighted) in the panel
    pub label: String,
    /// Text that replaces the input value when this suggestion is committed
    pub value: String,
    /// Rendering hint, e.g. a short glyph drawn before the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Arbitrary host data carried along untouched
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "userData")]
    pub user_data: Option<serde_json::Value>,
}

impl Suggestion {
    pub fn new(id: impl Into<SuggestionId>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            icon: None,
            user_data: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_user_data(mut self, data: serde_json::Value) -> Self {
        self.user_data = Some(data);
        self
    }
}
