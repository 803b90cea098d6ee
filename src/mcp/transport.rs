// file: src/mcp/transport.rs
// description: stdio and streamable http transports for the MCP server
// reference: https://docs.rs/rmcp

use crate::error::{ReadeckError, Result};
use crate::mcp::ReadeckMcp;
use reqwest::Url;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::fmt;
use std::str::FromStr;
use tokio::net::TcpListener;
use tracing::info;

/// Route the streamable HTTP transport is mounted on.
pub const MCP_PATH: &str = "/mcp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http { host: String, port: u16 },
}

impl FromStr for Transport {
    type Err = ReadeckError;

    /// Accepts `stdio` or an `http://host:port` listen address.
    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value == "stdio" {
            return Ok(Self::Stdio);
        }

        let unsupported = |reason: &str| {
            ReadeckError::InvalidArgument(format!(
                "Unsupported transport {:?}: {} (expected stdio or http://HOST:PORT)",
                value, reason
            ))
        };

        let url = Url::parse(value).map_err(|e| unsupported(&e.to_string()))?;
        if url.scheme() != "http" {
            return Err(unsupported("scheme must be http"));
        }

        let host = url
            .host_str()
            .ok_or_else(|| unsupported("missing host"))?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();
        let port = url
            .port_or_known_default()
            .ok_or_else(|| unsupported("missing port"))?;

        Ok(Self::Http { host, port })
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Http { host, port } => write!(f, "http://{}:{}", host, port),
        }
    }
}

/// Serves MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: ReadeckMcp) -> Result<()> {
    let running = server
        .serve(stdio())
        .await
        .map_err(|e| ReadeckError::Transport(e.to_string()))?;

    let reason = running
        .waiting()
        .await
        .map_err(|e| ReadeckError::Transport(e.to_string()))?;

    info!("stdio session closed: {:?}", reason);
    Ok(())
}

/// Serves MCP streamable HTTP on an already bound listener until Ctrl-C.
pub async fn serve_http(server: ReadeckMcp, listener: TcpListener) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(MCP_PATH, service);

    info!("Listening on http://{}{}", listener.local_addr()?, MCP_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("HTTP transport stopped");
    Ok(())
}
