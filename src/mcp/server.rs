// file: src/mcp/server.rs
// description: MCP server exposing readeck search and read tools
// reference: https://docs.rs/rmcp

use crate::client::ReadeckClient;
use crate::error::ReadeckError;
use crate::tools::{DEFAULT_LIMIT, DocumentFetcher, SearchAggregator};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo, Tool};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

const INSTRUCTIONS: &str = "Search and read articles saved in a Readeck knowledge base. \
Start with initial_search using single-word keywords, then use adjacent_search with keywords \
taken from the result descriptions to widen the search. Call read with the document_id values \
you want to inspect, and cite every article you use by its citation_url.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchArgs {
    /// Single-word keywords, each searched independently (no spaces)
    pub keywords: Vec<String>,
    /// Maximum number of results per keyword (default: 10, capped at 100)
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadArgs {
    /// document_id values returned by a previous search
    pub document_ids: Vec<String>,
}

impl From<ReadeckError> for McpError {
    fn from(err: ReadeckError) -> Self {
        let mut data = json!({ "kind": err.kind() });
        if let ReadeckError::UpstreamStatus { status, .. } = &err {
            data["status"] = json!(status.as_u16());
        }

        match err {
            ReadeckError::InvalidArgument(_) => McpError::invalid_params(err.to_string(), Some(data)),
            _ => McpError::internal_error(err.to_string(), Some(data)),
        }
    }
}

#[derive(Clone)]
pub struct ReadeckMcp {
    search: SearchAggregator,
    fetcher: DocumentFetcher,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ReadeckMcp {
    pub fn new(client: ReadeckClient) -> Self {
        Self {
            search: SearchAggregator::new(client.clone()),
            fetcher: DocumentFetcher::new(client),
            tool_router: Self::tool_router(),
        }
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn run_search(&self, tool: &str, args: SearchArgs) -> Result<CallToolResult, McpError> {
        let limit = args.limit.unwrap_or(DEFAULT_LIMIT);
        info!("MCP: {} for {:?} (limit: {})", tool, args.keywords, limit);

        let results = self
            .search
            .search_keywords(&args.keywords, limit)
            .await
            .inspect_err(|e| error!("MCP: {} failed: {}", tool, e))?;

        Ok(CallToolResult::success(vec![Content::json(results)?]))
    }

    #[tool(description = "Search the knowledge base for articles that match single keywords. \
After completing this initial search you can perform an adjacent_search to find related articles.")]
    async fn initial_search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search("initial_search", args).await
    }

    #[tool(description = "Search the knowledge base for articles that match the keywords. \
The keywords should be derived from the initial search result descriptions.")]
    async fn adjacent_search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search("adjacent_search", args).await
    }

    #[tool(description = "Read articles from the knowledge base by document_id. \
Make sure to use the citation_url to cite the article in your response.")]
    async fn read(
        &self,
        Parameters(args): Parameters<ReadArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!("MCP: read {:?}", args.document_ids);

        let documents = self
            .fetcher
            .read_documents(&args.document_ids)
            .await
            .inspect_err(|e| error!("MCP: read failed: {}", e))?;

        Ok(CallToolResult::success(vec![Content::json(documents)?]))
    }
}

#[tool_handler]
impl ServerHandler for ReadeckMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
