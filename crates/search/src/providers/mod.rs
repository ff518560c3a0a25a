//! Search provider implementations.

pub mod azure;
pub mod memory;

pub use azure::AzureSearchClient;
pub use memory::MemoryProvider;
