// file: src/main.rs
// description: commandline entry point selecting the MCP transport
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use readeck_mcp::utils::logging::{format_error, format_success, init_logger};
use readeck_mcp::{Config, ReadeckClient, ReadeckMcp, Transport, mcp};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "readeck-mcp")]
#[command(version)]
#[command(about = "MCP server for searching and reading Readeck bookmarks", long_about = None)]
struct Cli {
    /// Transport protocol to use (stdio or http://127.0.0.1:5001)
    #[arg(short, long, default_value = "stdio")]
    transport: String,

    /// Optional TOML file; READECK_* environment variables take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    let transport: Transport = cli.transport.parse().context("Invalid --transport")?;

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            return Err(e).context("Failed to load configuration");
        }
    };
    info!("Using Readeck at {}", config.url);

    let client = ReadeckClient::new(Arc::new(config)).context("Failed to create Readeck client")?;
    let server = ReadeckMcp::new(client);

    info!("MCP server ready. Available tools:");
    for tool in server.tools() {
        info!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }

    match transport {
        Transport::Stdio => {
            info!("Starting stdio transport...");
            mcp::serve_stdio(server).await?;
        }
        Transport::Http { host, port } => {
            let listener = TcpListener::bind((host.as_str(), port))
                .await
                .with_context(|| format!("Failed to bind {}:{}", host, port))?;
            let addr = listener.local_addr()?;
            eprintln!(
                "{}",
                format_success(&format!(
                    "readeck-mcp available at http://{}{}",
                    addr,
                    mcp::MCP_PATH
                ))
            );
            mcp::serve_http(server, listener).await?;
        }
    }

    Ok(())
}
