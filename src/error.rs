//! Error types for setanta-highlight

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for highlighter operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
///
/// Tokenizing never fails; these cover rule compilation, configuration and I/O.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern in rule '{rule}': {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule '{rule}' maps {mapped} groups but its pattern has {groups}")]
    GroupCount {
        rule: String,
        mapped: usize,
        groups: usize,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown token class: {0}")]
    UnknownTokenClass(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
}
