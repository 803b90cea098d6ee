// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod parser;
pub mod tools;
pub mod utils;

#[cfg(test)]
mod testing;

pub use client::ReadeckClient;
pub use config::Config;
pub use error::{ReadeckError, Result};
pub use mcp::{ReadeckMcp, Transport};
pub use models::{Bookmark, Document, SearchResult};
pub use parser::{HtmlConverter, TextNormalizer};
pub use tools::{DocumentFetcher, Documents, SearchAggregator, SearchResults};
pub use utils::Validator;
