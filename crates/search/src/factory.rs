//! Search provider factory.
//!
//! This module provides a factory for creating search providers based on
//! application configuration. It handles provider resolution and the
//! connection-settings requirement of hosted providers.

use crate::client::{SearchConnection, SearchProvider};
use crate::providers::{AzureSearchClient, MemoryProvider};
use std::sync::Arc;

/// Create a search provider based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("azure", "memory")
/// * `connection` - Connection settings (required for hosted providers)
///
/// # Returns
/// An `Arc`'d trait object implementing `SearchProvider`
///
/// # Errors
/// Returns error if the provider is unknown or a hosted provider is
/// requested without connection settings.
pub fn create_provider(
    provider: &str,
    connection: Option<SearchConnection>,
) -> Result<Arc<dyn SearchProvider>, String> {
    match provider.to_lowercase().as_str() {
        "azure" => {
            let connection = connection
                .ok_or_else(|| "Azure provider requires connection settings".to_string())?;
            Ok(Arc::new(AzureSearchClient::new(connection)))
        }
        "memory" => Ok(Arc::new(MemoryProvider::new())),
        _ => Err(format!("Unknown provider: {}", provider)),
    }
}
