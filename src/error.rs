use thiserror::Error;

/// Custom error types for quicksearch
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid suggestion file: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Script line {line}: {message}")]
    Script { line: usize, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
