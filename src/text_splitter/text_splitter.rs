use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::TextSplitterError;
use crate::schemas::Document;

/// Splits text into bounded chunks.
///
/// `split_documents` is the form the indexing pipeline uses: each input
/// document becomes zero or more chunk documents that inherit the parent's
/// metadata unchanged.
#[async_trait]
pub trait TextSplitter: Send + Sync {
    async fn split_text(&self, text: &str) -> Result<Vec<String>, TextSplitterError>;

    async fn split_documents(
        &self,
        documents: &[Document],
    ) -> Result<Vec<Document>, TextSplitterError> {
        let texts: Vec<String> = documents.iter().map(|d| d.page_content.clone()).collect();
        let metadatas: Vec<HashMap<String, Value>> =
            documents.iter().map(|d| d.metadata.clone()).collect();
        self.create_documents(&texts, &metadatas).await
    }

    async fn create_documents(
        &self,
        texts: &[String],
        metadatas: &[HashMap<String, Value>],
    ) -> Result<Vec<Document>, TextSplitterError> {
        if texts.len() != metadatas.len() {
            return Err(TextSplitterError::MetadataTextMismatch);
        }

        let mut documents = Vec::new();
        for (text, metadata) in texts.iter().zip(metadatas.iter()) {
            for chunk in self.split_text(text).await? {
                documents.push(Document::new(chunk).with_metadata(metadata.clone()));
            }
        }
        Ok(documents)
    }
}
