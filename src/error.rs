//! Domain error types for wheelpick
//!
//! Provides structured error types for different domains:
//! - `SoundError` for acquiring and driving the tick sound
//! - `PickerError` as the top-level error type

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for wheelpick
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config at {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Errors related to the tick sound resource
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("Output is not a terminal, bell unavailable")]
    NotATerminal,

    #[error("Could not open audio output: {0}")]
    OutputUnavailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

/// Result type alias for SoundError
pub type SoundResult<T> = std::result::Result<T, SoundError>;
