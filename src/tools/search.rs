// file: src/tools/search.rs
// description: per-keyword search fan-out against the Readeck store
// reference: https://readeck.org/en/docs/api

use crate::client::ReadeckClient;
use crate::error::Result;
use crate::models::SearchResult;
use crate::utils::validation::Validator;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const DEFAULT_LIMIT: usize = 10;

/// Search hits keyed by the exact keyword that produced them.
pub type SearchResults = BTreeMap<String, Vec<SearchResult>>;

#[derive(Clone)]
pub struct SearchAggregator {
    client: ReadeckClient,
}

impl SearchAggregator {
    pub fn new(client: ReadeckClient) -> Self {
        Self { client }
    }

    /// First page of results for a single query, at most `limit` long.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let bookmarks = self.client.list_bookmarks(query, 0, limit).await?;

        Ok(bookmarks
            .into_iter()
            .take(limit)
            .map(SearchResult::from)
            .collect())
    }

    /// Runs one independent search per keyword.
    ///
    /// Every keyword is validated before the first request goes out, so a
    /// single malformed keyword fails the call without partial results. Any
    /// upstream failure likewise aborts the whole call.
    pub async fn search_keywords(&self, keywords: &[String], limit: usize) -> Result<SearchResults> {
        let limit = Validator::clamp_limit(limit)?;
        for keyword in keywords {
            Validator::validate_keyword(keyword)?;
        }

        info!("Searching {} keyword(s) (limit: {})", keywords.len(), limit);

        let mut results = SearchResults::new();
        for keyword in keywords {
            if results.contains_key(keyword) {
                continue;
            }

            let hits = self.search(keyword, limit).await?;
            debug!("Keyword {:?} matched {} bookmark(s)", keyword, hits.len());
            results.insert(keyword.clone(), hits);
        }

        Ok(results)
    }
}
