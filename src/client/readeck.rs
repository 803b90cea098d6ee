// file: src/client/readeck.rs
// description: authenticated access to the Readeck bookmark and article endpoints
// reference: https://readeck.org/en/docs/api

use crate::config::Config;
use crate::error::{ReadeckError, Result};
use crate::models::Bookmark;
use crate::utils::validation::Validator;
use reqwest::{Client, Response};
use std::sync::Arc;
use tracing::debug;

/// Longest slice of an error body kept in `UpstreamStatus`.
const ERROR_BODY_EXCERPT: usize = 200;

#[derive(Clone)]
pub struct ReadeckClient {
    client: Client,
    config: Arc<Config>,
}

impl ReadeckClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ReadeckError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One page of non-errored bookmarks matching `search`.
    pub async fn list_bookmarks(
        &self,
        search: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Bookmark>> {
        let context = format!("search {:?}", search);

        debug!(
            "Requesting bookmarks (search: {:?}, offset: {}, limit: {})",
            search, offset, limit
        );

        let offset = offset.to_string();
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.config.search_endpoint())
            .bearer_auth(&self.config.token)
            .query(&[
                ("search", search),
                ("has_errors", "false"),
                ("offset", offset.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ReadeckError::UpstreamUnavailable {
                context: context.clone(),
                source,
            })?;

        let response = Self::ensure_success(response, &context).await?;

        let body = response
            .text()
            .await
            .map_err(|source| ReadeckError::UpstreamUnavailable {
                context: context.clone(),
                source,
            })?;

        let bookmarks: Vec<Bookmark> =
            serde_json::from_str(&body).map_err(|e| ReadeckError::UpstreamBody {
                context,
                message: e.to_string(),
            })?;

        debug!("Received {} bookmarks for {:?}", bookmarks.len(), search);
        Ok(bookmarks)
    }

    /// Raw article markup for one bookmark; decoding is left to the caller.
    pub async fn fetch_article(&self, document_id: &str) -> Result<Vec<u8>> {
        let context = format!("article {}", document_id);

        debug!("Requesting article {}", document_id);

        let response = self
            .client
            .get(self.config.article_endpoint(document_id))
            .bearer_auth(&self.config.token)
            .send()
            .await
            .map_err(|source| ReadeckError::UpstreamUnavailable {
                context: context.clone(),
                source,
            })?;

        let response = Self::ensure_success(response, &context).await?;

        let body = response
            .bytes()
            .await
            .map_err(|source| ReadeckError::UpstreamUnavailable { context, source })?;

        debug!("Received {} bytes for article {}", body.len(), document_id);
        Ok(body.to_vec())
    }

    async fn ensure_success(response: Response, context: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(ReadeckError::UpstreamStatus {
            context: context.to_string(),
            status,
            body: Validator::truncate_text(error_text.trim(), ERROR_BODY_EXCERPT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixtureStore, client_for};
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_list_bookmarks_sends_query_and_auth() {
        let store = FixtureStore::spawn().await;
        let client = client_for(&store.base_url);

        let bookmarks = client.list_bookmarks("rust", 0, 10).await.unwrap();
        assert_eq!(bookmarks.len(), 3);
        assert_eq!(bookmarks[0].id, "rust-1");
        assert_eq!(store.hits(), 1);
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected() {
        let store = FixtureStore::spawn().await;
        let config = Config::new(store.base_url.clone(), "wrong-token").unwrap();
        let client = ReadeckClient::new(Arc::new(config)).unwrap();

        let err = client.list_bookmarks("rust", 0, 10).await.unwrap_err();
        assert!(matches!(
            err,
            ReadeckError::UpstreamStatus { status: StatusCode::UNAUTHORIZED, .. }
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_upstream_body_error() {
        let store = FixtureStore::spawn().await;
        let client = client_for(&store.base_url);

        let err = client.list_bookmarks("broken", 0, 10).await.unwrap_err();
        assert!(matches!(err, ReadeckError::UpstreamBody { .. }));
    }

    #[tokio::test]
    async fn test_server_error_keeps_body_excerpt() {
        let store = FixtureStore::spawn().await;
        let client = client_for(&store.base_url);

        match client.list_bookmarks("explode", 0, 10).await {
            Err(ReadeckError::UpstreamStatus { status, body, context }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "index unavailable");
                assert!(context.contains("explode"));
            }
            other => panic!("unexpected result: {:?}", other.map(|b| b.len())),
        }
    }

    #[tokio::test]
    async fn test_unreachable_store() {
        let client = client_for("http://127.0.0.1:1");

        let err = client.fetch_article("abc123").await.unwrap_err();
        assert!(matches!(err, ReadeckError::UpstreamUnavailable { .. }));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_fetch_article_returns_markup() {
        let store = FixtureStore::spawn().await;
        let client = client_for(&store.base_url);

        let body = client.fetch_article("rust-1").await.unwrap();
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("<h1>Ownership</h1>"));
    }
}
