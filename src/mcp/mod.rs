// file: src/mcp/mod.rs
// description: MCP (Model Context Protocol) server for agentic tool integration
// reference: https://docs.rs/rmcp

pub mod server;
pub mod transport;

pub use server::{ReadArgs, ReadeckMcp, SearchArgs};
pub use transport::{MCP_PATH, Transport, serve_http, serve_stdio};
