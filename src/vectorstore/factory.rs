use std::sync::Arc;

use async_trait::async_trait;

use super::{VecStoreOptions, VectorStore, VectorStoreError};
use crate::embedding::Embedder;
use crate::schemas::Document;

/// Constructs a populated vector store from chunks and an embedder.
///
/// This is the seam the index builder uses to stay store-agnostic: any backend
/// that can build itself from `(chunks, embedder, options)` plugs in here.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    async fn from_documents(
        &self,
        docs: &[Document],
        embedder: Arc<dyn Embedder>,
        opt: &VecStoreOptions,
    ) -> Result<Arc<dyn VectorStore>, VectorStoreError>;
}

/// Builds the non-persistent in-memory store. State does not survive the
/// process; production configurations should supply their own factory.
#[cfg(feature = "in-memory")]
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreFactory;

#[cfg(feature = "in-memory")]
impl InMemoryStoreFactory {
    pub fn new() -> Self {
        InMemoryStoreFactory
    }
}

#[cfg(feature = "in-memory")]
#[async_trait]
impl StoreFactory for InMemoryStoreFactory {
    async fn from_documents(
        &self,
        docs: &[Document],
        embedder: Arc<dyn Embedder>,
        opt: &VecStoreOptions,
    ) -> Result<Arc<dyn VectorStore>, VectorStoreError> {
        let store = super::in_memory::StoreBuilder::new()
            .embedder_arc(embedder)
            .build()?;
        store.add_documents(docs, opt).await?;
        Ok(Arc::new(store))
    }
}
