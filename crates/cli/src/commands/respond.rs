//! Respond command handler.
//!
//! Runs the response node: prints either the generated answer or the
//! configured refusal, depending on the retrieval outcome.

use clap::Args;
use grounded_core::{AppConfig, AppResult};
use grounded_flow::{respond, RespondOptions, Retrieval};
use std::io::Read;

/// Produce the final user-facing message
#[derive(Args, Debug)]
pub struct RespondCommand {
    /// The generated answer to pass through
    pub llm_output: String,

    /// Whether retrieval found context
    #[arg(long, conflicts_with = "retrieval")]
    pub has_context: bool,

    /// Read the retrieval record as JSON from a file ("-" for stdin)
    #[arg(short, long)]
    pub retrieval: Option<String>,

    /// Override the configured refusal message
    #[arg(long)]
    pub refusal: Option<String>,
}

impl RespondCommand {
    /// Execute the respond command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing respond command");
        tracing::debug!("Respond options: {:?}", self);

        let has_context = match &self.retrieval {
            Some(source) => {
                let retrieval = read_retrieval(source)?;
                tracing::debug!("Loaded retrieval record: {:?}", retrieval);
                retrieval.has_context
            }
            None => self.has_context,
        };

        let options = RespondOptions::new().with_refusal(
            self.refusal
                .clone()
                .unwrap_or_else(|| config.refusal.clone()),
        );

        println!("{}", respond(has_context, &self.llm_output, &options));

        Ok(())
    }
}

/// Read a `Retrieval` record from a file path, or stdin for "-".
fn read_retrieval(source: &str) -> AppResult<Retrieval> {
    let contents = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(source)?
    };

    Ok(serde_json::from_str(&contents)?)
}
