//! Error types for announce

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for announce operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a spoken notification
#[derive(Debug, Error)]
pub enum Error {
    /// No usable input text
    #[error("input error: {0}")]
    Input(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Speech synthesis error
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Playback error
    #[error("playback error: {0}")]
    Playback(String),

    /// Cache-only lookup found no entry
    #[error("not found in cache: {}", .0.display())]
    CacheMiss(PathBuf),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
