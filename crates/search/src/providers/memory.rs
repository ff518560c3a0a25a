//! In-memory search provider for tests and local development.

use crate::client::{SearchDocument, SearchProvider, SearchRequest};
use grounded_core::AppResult;

/// In-memory provider backed by a fixed document list.
///
/// Scores each document by case-insensitive query-term overlap against its
/// string fields. Not a relevance model in any real sense, but deterministic
/// and content-dependent, which is what substituting the hosted service in
/// tests requires.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    documents: Vec<SearchDocument>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider over a fixed document list.
    pub fn with_documents(documents: Vec<SearchDocument>) -> Self {
        Self { documents }
    }

    /// Add a document to the index.
    pub fn push(&mut self, document: SearchDocument) {
        self.documents.push(document);
    }

    /// Number of query terms that occur in any string field of the document.
    fn overlap(document: &SearchDocument, terms: &[String]) -> usize {
        terms
            .iter()
            .filter(|term| {
                document.fields.values().any(|value| {
                    value
                        .as_str()
                        .map(|text| text.to_lowercase().contains(term.as_str()))
                        .unwrap_or(false)
                })
            })
            .count()
    }
}

#[async_trait::async_trait]
impl SearchProvider for MemoryProvider {
    fn provider_name(&self) -> &str {
        "memory"
    }

    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchDocument>> {
        let terms: Vec<String> = request
            .query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut scored: Vec<(usize, &SearchDocument)> = self
            .documents
            .iter()
            .map(|document| (Self::overlap(document, &terms), document))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Stable sort keeps insertion order between equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(request.top as usize)
            .map(|(score, document)| {
                let mut document = document.clone();
                document.score = Some(score as f64);
                document
            })
            .collect())
    }
}
