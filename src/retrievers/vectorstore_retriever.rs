use std::sync::Arc;

use async_trait::async_trait;

use super::RetrieverError;
use crate::schemas::{Document, Retriever};
use crate::vectorstore::{VecStoreOptions, VectorStore};

/// How a retriever view over a vector store behaves.
#[derive(Debug, Clone)]
pub struct RetrieverOptions {
    /// Number of documents to return.
    pub k: usize,
    /// Options forwarded to the underlying store search.
    pub options: VecStoreOptions,
}

impl Default for RetrieverOptions {
    fn default() -> Self {
        RetrieverOptions {
            k: 4,
            options: VecStoreOptions::default(),
        }
    }
}

impl RetrieverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_options(mut self, options: VecStoreOptions) -> Self {
        self.options = options;
        self
    }
}

/// Top-k retriever view over any vector store.
pub struct VectorStoreRetriever {
    vectorstore: Arc<dyn VectorStore>,
    options: RetrieverOptions,
}

impl VectorStoreRetriever {
    pub fn new(vectorstore: Arc<dyn VectorStore>, options: RetrieverOptions) -> Self {
        Self {
            vectorstore,
            options,
        }
    }
}

#[async_trait]
impl Retriever for VectorStoreRetriever {
    async fn get_relevant_documents(&self, query: &str) -> Result<Vec<Document>, RetrieverError> {
        Ok(self
            .vectorstore
            .similarity_search(query, self.options.k, &self.options.options)
            .await?)
    }
}

#[cfg(all(test, feature = "in-memory"))]
mod tests {
    use super::*;
    use crate::embedding::FakeEmbedder;
    use crate::vectorstore::in_memory::StoreBuilder;

    #[tokio::test]
    async fn test_retriever_returns_top_k() {
        let store = StoreBuilder::new()
            .embedder(FakeEmbedder::new())
            .build()
            .unwrap();
        let opt = VecStoreOptions::default();
        let docs: Vec<Document> = (0..6).map(|i| Document::new(format!("doc {i}"))).collect();
        store.add_documents(&docs, &opt).await.unwrap();

        let retriever =
            VectorStoreRetriever::new(Arc::new(store), RetrieverOptions::new().with_k(3));
        let found = retriever.get_relevant_documents("doc 0").await.unwrap();
        assert_eq!(found.len(), 3);
    }
}
