//! Flow node input/output types.

use serde::{Deserialize, Serialize};

/// Separator inserted between document texts in the joined context.
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Outcome of the retrieval node.
///
/// This is the record handed to the generation step and, later, to the
/// response node. It lives for a single request and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieval {
    /// Concatenated text extracted from the retrieved documents, in the
    /// order the search service returned them
    pub context: String,

    /// Whether any retrieved document contained the content field
    pub has_context: bool,
}

impl Retrieval {
    /// Build the outcome from extracted document texts.
    ///
    /// `has_context` is true exactly when at least one text was extracted;
    /// a present-but-empty field still counts.
    pub fn from_chunks(chunks: Vec<String>) -> Self {
        let has_context = !chunks.is_empty();
        Self {
            context: chunks.join(CHUNK_SEPARATOR),
            has_context,
        }
    }

    /// Empty outcome for queries with no usable matches.
    pub fn empty() -> Self {
        Self {
            context: String::new(),
            has_context: false,
        }
    }
}
