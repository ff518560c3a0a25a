//! Retrieval node.
//!
//! Queries a search provider for the top matches to a question and reshapes
//! them into the context record consumed by the generation step.

use crate::types::Retrieval;
use grounded_core::config::{DEFAULT_CONTENT_FIELD, DEFAULT_TOP};
use grounded_core::{AppError, AppResult};
use grounded_search::{SearchProvider, SearchRequest};
use serde::{Deserialize, Serialize};

/// Options for the retrieval node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieveOptions {
    /// Name of the document field holding the chunk text
    pub content_field: String,

    /// Result-count limit passed to the search provider
    pub top: u32,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        Self {
            content_field: DEFAULT_CONTENT_FIELD.to_string(),
            top: DEFAULT_TOP,
        }
    }
}

impl RetrieveOptions {
    /// Create options with the configured defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content field name.
    pub fn with_content_field(mut self, content_field: impl Into<String>) -> Self {
        self.content_field = content_field.into();
        self
    }

    /// Set the result-count limit.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = top;
        self
    }
}

/// Run the retrieval node.
///
/// Requests the top matches for `question`, extracts the content field from
/// each match, and joins the texts with a blank line. Matches lacking the
/// field (or holding a non-string value there) are silently skipped; the
/// service's relevance order is preserved as-is.
///
/// Provider failures (transport, authentication, malformed responses)
/// propagate to the caller unchanged — they are never mapped to an empty
/// outcome, so "retrieval unavailable" stays distinguishable from "nothing
/// relevant found".
pub async fn retrieve(
    provider: &dyn SearchProvider,
    question: &str,
    options: &RetrieveOptions,
) -> AppResult<Retrieval> {
    if question.trim().is_empty() {
        return Err(AppError::Flow("Question must not be empty".to_string()));
    }

    tracing::info!("Retrieving context for question: {}", question);

    let request = SearchRequest::new(question).with_top(options.top);
    let documents = provider.search(&request).await?;

    tracing::debug!("Search returned {} documents", documents.len());

    let chunks: Vec<String> = documents
        .iter()
        .filter_map(|document| document.field_str(&options.content_field))
        .map(str::to_string)
        .collect();

    if chunks.is_empty() {
        tracing::info!(
            "No documents carried the '{}' field",
            options.content_field
        );
        return Ok(Retrieval::empty());
    }

    tracing::info!("Extracted {} chunks", chunks.len());
    Ok(Retrieval::from_chunks(chunks))
}
