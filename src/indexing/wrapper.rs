use std::sync::Arc;

use super::IndexError;
use crate::chain::{RetrievalQABuilder, RetrievalQAWithSourcesBuilder, SourcedAnswer};
use crate::language_models::LLM;
use crate::retrievers::{RetrieverOptions, VectorStoreRetriever};
use crate::utils::block_on;
use crate::vectorstore::VectorStore;

/// Query-capable handle over a populated vector store.
///
/// Owns no business logic beyond wiring a retriever and a QA chain per call.
/// There is no default language model: every query must supply one, and a
/// missing model is a configuration error, not a fallback.
pub struct VectorStoreIndexWrapper {
    vectorstore: Arc<dyn VectorStore>,
}

impl VectorStoreIndexWrapper {
    pub fn new(vectorstore: Arc<dyn VectorStore>) -> Self {
        Self { vectorstore }
    }

    /// The backing store, for callers needing direct search or deletion.
    pub fn vectorstore(&self) -> Arc<dyn VectorStore> {
        self.vectorstore.clone()
    }

    fn require_llm(llm: Option<Box<dyn LLM>>) -> Result<Box<dyn LLM>, IndexError> {
        llm.ok_or_else(|| {
            IndexError::Configuration(
                "querying an index requires a language model; none is configured by default"
                    .to_string(),
            )
        })
    }

    /// Answer `question` with retrieval-augmented QA over this index.
    pub async fn query(
        &self,
        question: &str,
        llm: Option<Box<dyn LLM>>,
        retriever_options: &RetrieverOptions,
    ) -> Result<String, IndexError> {
        let llm = Self::require_llm(llm)?;
        let retriever =
            VectorStoreRetriever::new(self.vectorstore.clone(), retriever_options.clone());
        let chain = RetrievalQABuilder::new()
            .llm(llm)
            .retriever(retriever)
            .build()?;
        Ok(chain.invoke(question).await?)
    }

    /// Like [`query`](Self::query), but also reports the source identifiers
    /// of the chunks used to produce the answer.
    pub async fn query_with_sources(
        &self,
        question: &str,
        llm: Option<Box<dyn LLM>>,
        retriever_options: &RetrieverOptions,
    ) -> Result<SourcedAnswer, IndexError> {
        let llm = Self::require_llm(llm)?;
        let retriever =
            VectorStoreRetriever::new(self.vectorstore.clone(), retriever_options.clone());
        let chain = RetrievalQAWithSourcesBuilder::new()
            .llm(llm)
            .retriever(retriever)
            .build()?;
        Ok(chain.invoke(question).await?)
    }

    /// Blocking form of [`query`](Self::query). Must not be called from
    /// within an async context.
    pub fn query_blocking(
        &self,
        question: &str,
        llm: Option<Box<dyn LLM>>,
        retriever_options: &RetrieverOptions,
    ) -> Result<String, IndexError> {
        block_on(self.query(question, llm, retriever_options))?
    }

    /// Blocking form of [`query_with_sources`](Self::query_with_sources).
    /// Must not be called from within an async context.
    pub fn query_with_sources_blocking(
        &self,
        question: &str,
        llm: Option<Box<dyn LLM>>,
        retriever_options: &RetrieverOptions,
    ) -> Result<SourcedAnswer, IndexError> {
        block_on(self.query_with_sources(question, llm, retriever_options))?
    }
}

#[cfg(all(test, feature = "in-memory"))]
mod tests {
    use super::*;
    use crate::embedding::FakeEmbedder;
    use crate::indexing::VectorStoreIndexCreator;
    use crate::language_models::FakeLLM;
    use crate::schemas::Document;

    async fn index_of(texts: &[&str]) -> VectorStoreIndexWrapper {
        let creator = VectorStoreIndexCreator::builder()
            .embedder(FakeEmbedder::new())
            .with_volatile_default_store()
            .build()
            .unwrap();
        let documents: Vec<Document> = texts.iter().map(|t| Document::new(*t)).collect();
        creator.from_documents(&documents).await.unwrap()
    }

    #[tokio::test]
    async fn test_query_requires_llm() {
        let index = index_of(&["cats are mammals"]).await;
        let result = index
            .query("are cats mammals?", None, &RetrieverOptions::default())
            .await;
        assert!(matches!(result, Err(IndexError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_query_with_sources_requires_llm() {
        let index = index_of(&["cats are mammals"]).await;
        let result = index
            .query_with_sources("are cats mammals?", None, &RetrieverOptions::default())
            .await;
        assert!(matches!(result, Err(IndexError::Configuration(_))));
    }

    #[test]
    fn test_blocking_query_requires_llm() {
        let creator = VectorStoreIndexCreator::builder()
            .embedder(FakeEmbedder::new())
            .with_volatile_default_store()
            .build()
            .unwrap();
        let index = creator
            .from_documents_blocking(&[Document::new("cats are mammals")])
            .unwrap();

        let result = index.query_blocking("are cats mammals?", None, &RetrieverOptions::default());
        assert!(matches!(result, Err(IndexError::Configuration(_))));

        let result = index.query_with_sources_blocking(
            "are cats mammals?",
            None,
            &RetrieverOptions::default(),
        );
        assert!(matches!(result, Err(IndexError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_query_answers_with_model_response() {
        let index = index_of(&["cats are mammals", "dogs are mammals"]).await;
        let answer = index
            .query(
                "are cats mammals?",
                Some(FakeLLM::with_response("yes").into()),
                &RetrieverOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(answer, "yes");
    }
}
