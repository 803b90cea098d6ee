// file: src/models/search_result.rs
// description: lightweight search hit returned by the search tools
// reference: Used for keyword search results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,

    /// Short summary; empty when the store has none
    pub description: String,

    /// Opaque Readeck bookmark id, accepted by the `read` tool
    pub document_id: String,
}

impl SearchResult {
    pub fn new(title: String, description: String, document_id: String) -> Self {
        Self {
            title,
            description,
            document_id,
        }
    }
}
