//! Flow nodes for retrieval-gated answering.
//!
//! This crate implements the two pipeline nodes composed by an external
//! orchestrator:
//!
//! - [`retrieve`]: query a search provider and reshape the matches into a
//!   context record
//! - [`respond`]: return the generated answer, or the configured refusal
//!   when retrieval found nothing
//!
//! The generation step between the two nodes is out of scope; its output
//! reaches [`respond`] as a plain string.
//!
//! # Example
//! ```no_run
//! use grounded_flow::{respond, retrieve, RespondOptions, RetrieveOptions};
//! use grounded_search::MemoryProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MemoryProvider::new();
//! let retrieval = retrieve(&provider, "What is the refund policy?", &RetrieveOptions::default()).await?;
//! // ... generation step happens elsewhere ...
//! let message = respond(retrieval.has_context, "Refunds take 30 days.", &RespondOptions::default());
//! println!("{}", message);
//! # Ok(())
//! # }
//! ```

pub mod respond;
pub mod retrieve;
pub mod types;

// Re-export main types
pub use respond::{respond, RespondOptions};
pub use retrieve::{retrieve, RetrieveOptions};
pub use types::{Retrieval, CHUNK_SEPARATOR};
