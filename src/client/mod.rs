// file: src/client/mod.rs
// description: Readeck HTTP API client exports
// reference: internal module structure

pub mod readeck;

pub use readeck::ReadeckClient;
