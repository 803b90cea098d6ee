// file: src/models/document.rs
// description: article content paired with its citation link
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Article body as normalized Markdown text, without links or images
    pub content: String,

    /// Reader-facing bookmark page, distinct from the API endpoint
    pub citation_url: String,
}

impl Document {
    pub fn new(content: String, citation_url: String) -> Self {
        Self {
            content,
            citation_url,
        }
    }
}
