//! Error types for kolamba
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for kolamba
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for kolamba
pub type Result<T> = std::result::Result<T, AppError>;
