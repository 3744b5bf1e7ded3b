use std::sync::Arc;

use futures_util::StreamExt;

use super::{IndexError, VectorStoreIndexWrapper};
use crate::document_loaders::Loader;
use crate::embedding::Embedder;
use crate::schemas::Document;
use crate::text_splitter::{CharacterTextSplitter, TextSplitter};
use crate::utils::block_on;
use crate::vectorstore::{StoreFactory, VecStoreOptions};

/// Builds a queryable index from documents or loaders.
///
/// Splits each document with the configured splitter (default: fixed 1000
/// character chunks, zero overlap), then hands the chunks and the embedder to
/// the store factory. The creator performs no retries; embedder, splitter, and
/// store failures propagate unchanged.
pub struct VectorStoreIndexCreator {
    embedder: Arc<dyn Embedder>,
    text_splitter: Arc<dyn TextSplitter>,
    store_factory: Option<Arc<dyn StoreFactory>>,
    store_options: VecStoreOptions,
    volatile_default_acknowledged: bool,
}

impl VectorStoreIndexCreator {
    pub fn builder() -> VectorStoreIndexCreatorBuilder {
        VectorStoreIndexCreatorBuilder::new()
    }

    fn store_factory(&self) -> Result<Arc<dyn StoreFactory>, IndexError> {
        if let Some(factory) = &self.store_factory {
            return Ok(factory.clone());
        }
        self.default_store_factory()
    }

    #[cfg(feature = "in-memory")]
    fn default_store_factory(&self) -> Result<Arc<dyn StoreFactory>, IndexError> {
        if !self.volatile_default_acknowledged {
            log::warn!(
                "no vector store factory configured; falling back to the in-memory store. \
                 Indexed data will not survive this process. Configure a store factory, or \
                 call with_volatile_default_store() to acknowledge the fallback."
            );
        }
        Ok(Arc::new(crate::vectorstore::InMemoryStoreFactory::new()))
    }

    #[cfg(not(feature = "in-memory"))]
    fn default_store_factory(&self) -> Result<Arc<dyn StoreFactory>, IndexError> {
        Err(IndexError::Configuration(
            "no vector store factory configured and no default store is available \
             (the in-memory feature is disabled)"
                .to_string(),
        ))
    }

    /// Split, embed, and store `documents`, returning the index handle.
    pub async fn from_documents(
        &self,
        documents: &[Document],
    ) -> Result<VectorStoreIndexWrapper, IndexError> {
        let chunks = self.text_splitter.split_documents(documents).await?;
        log::debug!(
            "indexing {} chunks from {} documents",
            chunks.len(),
            documents.len()
        );
        let factory = self.store_factory()?;
        let store = factory
            .from_documents(&chunks, self.embedder.clone(), &self.store_options)
            .await?;
        Ok(VectorStoreIndexWrapper::new(store))
    }

    /// Drain every loader fully, in loader order then production order, then
    /// index the concatenated documents. No deduplication is performed.
    pub async fn from_loaders<L: Loader>(
        &self,
        loaders: Vec<L>,
    ) -> Result<VectorStoreIndexWrapper, IndexError> {
        let mut documents = Vec::new();
        for loader in loaders {
            let mut stream = loader.load().await?;
            while let Some(document) = stream.next().await {
                documents.push(document?);
            }
        }
        self.from_documents(&documents).await
    }

    /// Blocking form of [`from_documents`](Self::from_documents). Must not be
    /// called from within an async context.
    pub fn from_documents_blocking(
        &self,
        documents: &[Document],
    ) -> Result<VectorStoreIndexWrapper, IndexError> {
        block_on(self.from_documents(documents))?
    }

    /// Blocking form of [`from_loaders`](Self::from_loaders). Must not be
    /// called from within an async context.
    pub fn from_loaders_blocking<L: Loader>(
        &self,
        loaders: Vec<L>,
    ) -> Result<VectorStoreIndexWrapper, IndexError> {
        block_on(self.from_loaders(loaders))?
    }
}

pub struct VectorStoreIndexCreatorBuilder {
    embedder: Option<Arc<dyn Embedder>>,
    text_splitter: Option<Arc<dyn TextSplitter>>,
    store_factory: Option<Arc<dyn StoreFactory>>,
    store_options: VecStoreOptions,
    volatile_default_acknowledged: bool,
}

impl VectorStoreIndexCreatorBuilder {
    pub fn new() -> Self {
        Self {
            embedder: None,
            text_splitter: None,
            store_factory: None,
            store_options: VecStoreOptions::default(),
            volatile_default_acknowledged: false,
        }
    }

    pub fn embedder<E: Embedder + 'static>(mut self, embedder: E) -> Self {
        self.embedder = Some(Arc::new(embedder));
        self
    }

    pub fn embedder_arc(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn text_splitter<TS: TextSplitter + 'static>(mut self, splitter: TS) -> Self {
        self.text_splitter = Some(Arc::new(splitter));
        self
    }

    pub fn store_factory<F: StoreFactory + 'static>(mut self, factory: F) -> Self {
        self.store_factory = Some(Arc::new(factory));
        self
    }

    pub fn store_factory_arc(mut self, factory: Arc<dyn StoreFactory>) -> Self {
        self.store_factory = Some(factory);
        self
    }

    /// Options forwarded to the store factory (namespace, filters, ...).
    pub fn store_options(mut self, options: VecStoreOptions) -> Self {
        self.store_options = options;
        self
    }

    /// Acknowledge that, absent a configured store factory, the index will
    /// live in the volatile in-memory store. Suppresses the fallback warning.
    pub fn with_volatile_default_store(mut self) -> Self {
        self.volatile_default_acknowledged = true;
        self
    }

    pub fn build(self) -> Result<VectorStoreIndexCreator, IndexError> {
        let embedder = self.embedder.ok_or_else(|| {
            IndexError::Configuration("an embedder is required to build an index".to_string())
        })?;
        let text_splitter = self
            .text_splitter
            .unwrap_or_else(|| Arc::new(CharacterTextSplitter::new().with_chunk_size(1000)));
        Ok(VectorStoreIndexCreator {
            embedder,
            text_splitter,
            store_factory: self.store_factory,
            store_options: self.store_options,
            volatile_default_acknowledged: self.volatile_default_acknowledged,
        })
    }
}

impl Default for VectorStoreIndexCreatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
