//! Search provider crate for the Grounded pipeline.
//!
//! This crate provides a provider-agnostic abstraction over hosted
//! full-text search. The retrieval node talks to the `SearchProvider`
//! trait; the concrete hosted service can be substituted with an
//! in-memory fake in tests.
//!
//! # Providers
//! - **Azure AI Search**: hosted index queried over HTTPS (default)
//! - **Memory**: deterministic in-process fake for tests and development
//!
//! # Example
//! ```no_run
//! use grounded_search::{AzureSearchClient, SearchConnection, SearchProvider, SearchRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = SearchConnection::new(
//!     "https://acme.search.windows.net",
//!     "docs",
//!     "secret-key",
//! );
//! let client = AzureSearchClient::new(connection);
//! let documents = client.search(&SearchRequest::new("refund policy")).await?;
//! println!("{} matches", documents.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{SearchConnection, SearchDocument, SearchProvider, SearchRequest};
pub use factory::create_provider;
pub use providers::{AzureSearchClient, MemoryProvider};
