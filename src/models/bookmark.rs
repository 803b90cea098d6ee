// file: src/models/bookmark.rs
// description: raw bookmark record as returned by the Readeck search endpoint
// reference: https://readeck.org/en/docs/api

use crate::models::SearchResult;
use serde::{Deserialize, Deserializer};

/// Boundary schema for one entry of `GET /api/bookmarks`.
///
/// Only the fields the tools consume are declared; everything else Readeck
/// sends is ignored. `id` and `title` are required, `description` may be
/// missing or `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<Bookmark> for SearchResult {
    fn from(bookmark: Bookmark) -> Self {
        SearchResult::new(bookmark.title, bookmark.description, bookmark.id)
    }
}
