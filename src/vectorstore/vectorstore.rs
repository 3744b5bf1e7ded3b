use async_trait::async_trait;

use super::{VecStoreOptions, VectorStoreError};
use crate::schemas::Document;

/// Similarity search over (document, embedding) pairs.
///
/// Object-safe so indexes, retrievers, and chains can hold `Arc<dyn VectorStore>`
/// regardless of the backing implementation.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Embed and store documents, returning the assigned ids in input order.
    async fn add_documents(
        &self,
        docs: &[Document],
        opt: &VecStoreOptions,
    ) -> Result<Vec<String>, VectorStoreError>;

    /// Return up to `limit` documents most similar to `query`, best first,
    /// with their `score` field set.
    async fn similarity_search(
        &self,
        query: &str,
        limit: usize,
        opt: &VecStoreOptions,
    ) -> Result<Vec<Document>, VectorStoreError>;

    async fn delete(&self, _ids: &[String], _opt: &VecStoreOptions) -> Result<(), VectorStoreError> {
        Err(VectorStoreError::DeleteNotSupported)
    }
}
