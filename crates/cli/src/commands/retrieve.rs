//! Retrieve command handler.
//!
//! Runs the retrieval node and prints the resulting record as JSON on
//! stdout, ready to be piped onward.

use clap::Args;
use grounded_core::{AppConfig, AppError, AppResult};
use grounded_flow::{retrieve, RetrieveOptions};
use grounded_search::create_provider;

/// Retrieve context for a question
#[derive(Args, Debug)]
pub struct RetrieveCommand {
    /// The question to search for
    pub question: String,

    /// Result-count limit (default from config)
    #[arg(long)]
    pub top: Option<u32>,

    /// Document field holding the chunk text (default from config)
    #[arg(long)]
    pub content_field: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl RetrieveCommand {
    /// Execute the retrieve command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing retrieve command");
        tracing::debug!("Retrieve options: {:?}", self);

        config.validate()?;

        let connection = super::build_connection(config)?;
        let provider = create_provider(&config.provider, connection)
            .map_err(|e| AppError::Config(format!("Failed to create search provider: {}", e)))?;

        let options = RetrieveOptions::new()
            .with_content_field(
                self.content_field
                    .clone()
                    .unwrap_or_else(|| config.content_field.clone()),
            )
            .with_top(self.top.unwrap_or(config.top));

        let retrieval = retrieve(provider.as_ref(), &self.question, &options).await?;

        tracing::info!(
            "Retrieval finished (has_context: {})",
            retrieval.has_context
        );

        let output = if self.pretty {
            serde_json::to_string_pretty(&retrieval)?
        } else {
            serde_json::to_string(&retrieval)?
        };
        println!("{}", output);

        Ok(())
    }
}
