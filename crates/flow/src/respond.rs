//! Response node.
//!
//! Decides the final message sent to the user: the generated answer when
//! retrieval found context, the configured refusal otherwise.

use grounded_core::config::DEFAULT_REFUSAL;
use serde::{Deserialize, Serialize};

/// Options for the response node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondOptions {
    /// Message returned when retrieval produced no context
    pub refusal: String,
}

impl Default for RespondOptions {
    fn default() -> Self {
        Self {
            refusal: DEFAULT_REFUSAL.to_string(),
        }
    }
}

impl RespondOptions {
    /// Create options with the configured default refusal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the refusal message.
    pub fn with_refusal(mut self, refusal: impl Into<String>) -> Self {
        self.refusal = refusal.into();
        self
    }
}

/// Run the response node.
///
/// Total function over its inputs: no side effects, no failure modes. When
/// `has_context` is false the refusal is returned regardless of
/// `llm_output`; otherwise `llm_output` passes through unchanged.
pub fn respond(has_context: bool, llm_output: &str, options: &RespondOptions) -> String {
    if !has_context {
        tracing::debug!("No context was retrieved, answering with the refusal");
        return options.refusal.clone();
    }

    llm_output.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_without_context() {
        let options = RespondOptions::default();
        assert_eq!(respond(false, "A generated answer.", &options), DEFAULT_REFUSAL);
    }

    #[test]
    fn test_refusal_ignores_llm_output() {
        let options = RespondOptions::default();

        // Empty, long, and refusal-containing outputs all yield the refusal
        assert_eq!(respond(false, "", &options), DEFAULT_REFUSAL);
        assert_eq!(respond(false, &"long ".repeat(10_000), &options), DEFAULT_REFUSAL);
        let tricky = format!("prefix {} suffix", DEFAULT_REFUSAL);
        assert_eq!(respond(false, &tricky, &options), DEFAULT_REFUSAL);
    }

    #[test]
    fn test_passthrough_with_context() {
        let options = RespondOptions::default();
        let answer = "Refunds are accepted within 30 days of purchase.";
        assert_eq!(respond(true, answer, &options), answer);
    }

    #[test]
    fn test_passthrough_is_byte_identical() {
        let options = RespondOptions::default();

        assert_eq!(respond(true, "", &options), "");
        let unusual = "  spaced \u{00e9}\u{4e16}\n\ttabs  ";
        assert_eq!(respond(true, unusual, &options), unusual);
    }

    #[test]
    fn test_custom_refusal() {
        let options = RespondOptions::new().with_refusal("Ask me about the docs.");
        assert_eq!(respond(false, "answer", &options), "Ask me about the docs.");
    }
}
