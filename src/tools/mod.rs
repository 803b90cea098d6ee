// file: src/tools/mod.rs
// description: search and read operations behind the MCP tools
// reference: internal module structure

pub mod read;
pub mod search;

pub use read::{DocumentFetcher, Documents};
pub use search::{DEFAULT_LIMIT, SearchAggregator, SearchResults};
