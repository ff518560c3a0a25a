//! Search provider abstraction and request/response types.
//!
//! This module defines the core abstractions for querying full-text search
//! services.

use grounded_core::config::DEFAULT_TOP;
use grounded_core::AppResult;
use serde::{Deserialize, Serialize};

/// Connection settings for a hosted search index.
///
/// Endpoint, index, and key are opaque values passed through unchanged from
/// configuration; credential management belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConnection {
    /// Base URL of the search service
    pub endpoint: String,

    /// Name of the index to query
    pub index: String,

    /// Access key sent with every request
    pub api_key: String,
}

impl SearchConnection {
    /// Create connection settings from their three parts.
    pub fn new(
        endpoint: impl Into<String>,
        index: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            index: index.into(),
            api_key: api_key.into(),
        }
    }
}

/// Free-text search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The query text
    pub query: String,

    /// Maximum number of documents to return
    pub top: u32,
}

impl SearchRequest {
    /// Create a new search request with the default result-count limit.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top: DEFAULT_TOP,
        }
    }

    /// Set the result-count limit.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = top;
        self
    }
}

/// A single document returned by a search provider.
///
/// The field set is open: whatever the index stores comes back as JSON.
/// Hosted services report the relevance score out of band
/// (`@search.score`); providers that do not score leave it unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
    /// Relevance score assigned by the service
    #[serde(
        rename = "@search.score",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,

    /// Index fields as returned by the service
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl SearchDocument {
    /// Build an unscored document from raw JSON fields.
    pub fn from_fields(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            score: None,
            fields,
        }
    }

    /// Get a field by name if it is present and string-valued.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|value| value.as_str())
    }
}

/// Trait for search providers.
///
/// This trait abstracts the underlying search service (Azure AI Search,
/// an in-memory fake, etc.) behind the one operation the retrieval node
/// needs: a free-text query with a result-count limit, answered with
/// ranked documents.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Get the provider name (e.g., "azure", "memory").
    fn provider_name(&self) -> &str;

    /// Run a free-text query and return documents in the service's
    /// relevance order.
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchDocument>>;
}
