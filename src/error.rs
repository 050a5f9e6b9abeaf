//! TuxDictate Error Types
//!
//! Errors from the glue around the normalizer. Normalization itself
//! cannot fail.

use thiserror::Error;

/// Central error type for TuxDictate
#[derive(Error, Debug)]
pub enum DictateError {
    #[error("ASR engine error: {0}")]
    Asr(String),

    #[error("Audio capture error: {0}")]
    Audio(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for TuxDictate operations
pub type DictateResult<T> = Result<T, DictateError>;
