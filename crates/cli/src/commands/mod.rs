//! Command handlers for the Grounded CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod respond;
pub mod retrieve;

// Re-export command types for convenience
pub use respond::RespondCommand;
pub use retrieve::RetrieveCommand;

use grounded_core::{AppConfig, AppError, AppResult};
use grounded_search::SearchConnection;

/// Assemble connection settings from the configuration.
///
/// Returns `None` when no endpoint/index is configured (the memory provider
/// needs none); a configured endpoint without a resolvable key is an error.
pub(crate) fn build_connection(config: &AppConfig) -> AppResult<Option<SearchConnection>> {
    let (endpoint, index) = match (&config.endpoint, &config.index) {
        (Some(endpoint), Some(index)) => (endpoint, index),
        _ => return Ok(None),
    };

    let api_key = config.resolve_api_key()?.ok_or_else(|| {
        AppError::Config(
            "Search API key not set (GROUNDED_SEARCH_API_KEY or search.apiKeyEnv)".to_string(),
        )
    })?;

    Ok(Some(SearchConnection::new(
        endpoint.as_str(),
        index.as_str(),
        api_key,
    )))
}
