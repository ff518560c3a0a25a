//! Error types for the Grounded pipeline nodes.
//!
//! This module defines a unified error enum that covers all error categories
//! in the workspace, including configuration, I/O, search retrieval, and
//! flow node errors.

use thiserror::Error;

/// Unified error type for the Grounded workspace.
///
/// All fallible functions return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search provider errors ("retrieval unavailable")
    #[error("Search error: {0}")]
    Search(String),

    /// Flow node errors
    #[error("Flow error: {0}")]
    Flow(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
