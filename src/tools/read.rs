// file: src/tools/read.rs
// description: article retrieval and conversion into citable documents
// reference: https://readeck.org/en/docs/api

use crate::client::ReadeckClient;
use crate::error::{ReadeckError, Result};
use crate::models::Document;
use crate::parser::{HtmlConverter, TextNormalizer};
use crate::utils::validation::Validator;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Documents keyed by the identifier they were requested with.
pub type Documents = BTreeMap<String, Document>;

#[derive(Clone)]
pub struct DocumentFetcher {
    client: ReadeckClient,
    converter: HtmlConverter,
    normalizer: TextNormalizer,
}

impl DocumentFetcher {
    pub fn new(client: ReadeckClient) -> Self {
        Self {
            client,
            converter: HtmlConverter::new(),
            normalizer: TextNormalizer::new(),
        }
    }

    pub async fn read_document(&self, document_id: &str) -> Result<Document> {
        Validator::validate_document_id(document_id)?;

        let body = self.client.fetch_article(document_id).await?;
        let content = self.convert(document_id, body)?;
        let citation_url = self.client.config().citation_url(document_id);

        debug!(
            "Converted article {} ({} chars)",
            document_id,
            content.chars().count()
        );

        Ok(Document::new(content, citation_url))
    }

    /// Reads documents in order, stopping at the first failure.
    pub async fn read_documents(&self, document_ids: &[String]) -> Result<Documents> {
        for document_id in document_ids {
            Validator::validate_document_id(document_id)?;
        }

        info!("Reading {} document(s)", document_ids.len());

        let mut documents = Documents::new();
        for document_id in document_ids {
            if documents.contains_key(document_id) {
                continue;
            }

            let document = self.read_document(document_id).await?;
            documents.insert(document_id.clone(), document);
        }

        Ok(documents)
    }

    fn convert(&self, document_id: &str, body: Vec<u8>) -> Result<String> {
        let html = String::from_utf8(body).map_err(|e| ReadeckError::Conversion {
            document_id: document_id.to_string(),
            message: format!("article body is not valid UTF-8: {}", e),
        })?;

        let markdown = self.converter.convert(&html);
        Ok(self.normalizer.normalize(&markdown))
    }
}
