use std::path::PathBuf;

use thiserror::Error;

use crate::fetcher::FetchError;

/// Custom error types for atmention
#[derive(Debug, Error)]
pub enum AtMentionError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config in {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Lookup setup failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
