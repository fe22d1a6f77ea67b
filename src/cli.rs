//! Command-line arguments
//!
//! Flags override the config file field by field.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::SearchError;
use crate::search_input::{SearchInputOptions, ValueSource};

#[derive(Debug, Parser)]
#[command(name = "quicksearch", version)]
#[command(about = "Autocomplete search input with debounced search and keyboard navigation")]
pub struct Args {
    /// Config file (default: <config dir>/quicksearch/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with an array of suggestions to search
    #[arg(long, value_name = "FILE")]
    pub suggestions: Option<PathBuf>,

    /// Quiet period after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Number of suggestions shown in the panel
    #[arg(long, value_name = "N")]
    pub max_suggestions: Option<usize>,

    /// Search only on Enter, never while typing
    #[arg(long)]
    pub submit_only: bool,

    /// Hide the suggestion panel
    #[arg(long)]
    pub no_suggestions: bool,

    /// Let the host own the input's value
    #[arg(long)]
    pub controlled: bool,

    /// Starting text for the input
    #[arg(long, value_name = "TEXT")]
    pub initial: Option<String>,

    /// Run headless from a JSON-lines script ("-" reads stdin)
    #[arg(long, value_name = "FILE|-")]
    pub script: Option<PathBuf>,
}

impl Args {
    /// Controller options from the config with flags applied on top
    pub fn input_options(&self, config: &Config) -> SearchInputOptions {
        let value = if self.controlled {
            ValueSource::Controlled(self.initial.clone().unwrap_or_default())
        } else {
            ValueSource::Uncontrolled {
                initial: self.initial.clone(),
            }
        };

        SearchInputOptions {
            value,
            debounce_ms: self.debounce_ms.unwrap_or(config.search.debounce_ms),
            max_suggestions: self.max_suggestions.unwrap_or(config.search.max_suggestions),
            search_on_submit_only: self.submit_only || config.search.submit_only,
            show_suggestions: !self.no_suggestions && config.search.show_suggestions,
        }
    }

    /// Suggestion file from the flag, then the config, else the built-in set
    pub fn load_catalog(&self, config: &Config) -> Result<Catalog, SearchError> {
        match self.suggestions.as_ref().or(config.catalog.path.as_ref()) {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn script_from_stdin(&self) -> bool {
        self.script.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}
