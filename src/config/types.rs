// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::search_input::{DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_SUGGESTIONS};

/// Search input configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_suggestions: usize,
    pub submit_only: bool,
    pub show_suggestions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            submit_only: false,
            show_suggestions: true,
        }
    }
}

/// Candidate catalog configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with an array of suggestions; built-in set when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
