//! Azure AI Search provider implementation.
//!
//! This module provides integration with Azure AI Search over its REST API.
//! API reference: https://learn.microsoft.com/en-us/rest/api/searchservice/documents/search-post

use crate::client::{SearchConnection, SearchDocument, SearchProvider, SearchRequest};
use grounded_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// API version sent with every request.
const DEFAULT_API_VERSION: &str = "2023-11-01";

/// Azure AI Search request body.
#[derive(Debug, Serialize)]
struct AzureSearchRequest<'a> {
    search: &'a str,
    top: u32,
}

/// Azure AI Search response body.
#[derive(Debug, Deserialize)]
struct AzureSearchResponse {
    #[serde(default)]
    value: Vec<SearchDocument>,
}

/// Azure AI Search client.
pub struct AzureSearchClient {
    /// Connection settings for the target index
    connection: SearchConnection,

    /// REST API version
    api_version: String,

    /// HTTP client
    client: reqwest::Client,
}

impl AzureSearchClient {
    /// Create a new client for the given connection.
    pub fn new(connection: SearchConnection) -> Self {
        Self {
            connection,
            api_version: DEFAULT_API_VERSION.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the REST API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Build the document-search URL for the configured index.
    fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.connection.endpoint.trim_end_matches('/'),
            self.connection.index,
            self.api_version
        )
    }
}

#[async_trait::async_trait]
impl SearchProvider for AzureSearchClient {
    fn provider_name(&self) -> &str {
        "azure"
    }

    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchDocument>> {
        tracing::info!(
            "Querying index '{}' (top {})",
            self.connection.index,
            request.top
        );
        tracing::debug!("Request: {:?}", request);

        let body = AzureSearchRequest {
            search: &request.query,
            top: request.top,
        };

        let response = self
            .client
            .post(self.search_url())
            .header("api-key", &self.connection.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Search(format!("Failed to reach search service: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Search(format!(
                "Search service error ({}): {}",
                status, error_text
            )));
        }

        let parsed: AzureSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("Failed to parse search response: {}", e)))?;

        tracing::info!("Search returned {} documents", parsed.value.len());
        tracing::debug!("Response: {:?}", parsed);

        Ok(parsed.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_connection() -> SearchConnection {
        SearchConnection::new("https://acme.search.windows.net", "docs", "secret-key")
    }

    #[test]
    fn test_client_creation() {
        let client = AzureSearchClient::new(test_connection());
        assert_eq!(client.provider_name(), "azure");
        assert_eq!(client.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_search_url() {
        let client = AzureSearchClient::new(test_connection());
        assert_eq!(
            client.search_url(),
            "https://acme.search.windows.net/indexes/docs/docs/search?api-version=2023-11-01"
        );
    }

    #[test]
    fn test_search_url_trims_trailing_slash() {
        let connection =
            SearchConnection::new("https://acme.search.windows.net/", "docs", "secret-key");
        let client = AzureSearchClient::new(connection).with_api_version("2024-07-01");
        assert_eq!(
            client.search_url(),
            "https://acme.search.windows.net/indexes/docs/docs/search?api-version=2024-07-01"
        );
    }

    #[test]
    fn test_request_body_serialization() {
        let body = AzureSearchRequest {
            search: "refund policy",
            top: 3,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "search": "refund policy", "top": 3 })
        );
    }

    #[test]
    fn test_response_parsing() {
        let payload = r#"{
            "@odata.context": "https://acme.search.windows.net/indexes('docs')/$metadata#docs",
            "value": [
                { "@search.score": 2.17, "chunk": "Refunds within 30 days.", "title": "Refunds" },
                { "@search.score": 1.03, "chunk": "Contact support." }
            ]
        }"#;

        let parsed: AzureSearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.value.len(), 2);
        assert_eq!(parsed.value[0].score, Some(2.17));
        assert_eq!(
            parsed.value[0].field_str("chunk"),
            Some("Refunds within 30 days.")
        );
        assert_eq!(parsed.value[0].field_str("title"), Some("Refunds"));
        assert_eq!(parsed.value[1].field_str("chunk"), Some("Contact support."));
    }

    #[test]
    fn test_response_parsing_missing_value() {
        let parsed: AzureSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.value.is_empty());
    }
}
