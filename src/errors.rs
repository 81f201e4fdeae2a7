// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IgnoreError {
    #[error("IO error reading ignore file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IgnoreError {
    /// Raw pattern text for `Pattern` errors.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            IgnoreError::Pattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IgnoreError>;
