use serde::{Deserialize, Serialize};

use super::{ChainError, RetrievalQA, RetrievalQABuilder};
use crate::language_models::LLM;
use crate::schemas::{Document, Retriever};

/// Answer text plus the source identifiers of the chunks it was produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedAnswer {
    pub answer: String,
    /// Distinct `source` metadata values of the stuffed chunks, in retrieval
    /// order. Chunks without a source are skipped.
    pub sources: Vec<String>,
}

/// [`RetrievalQA`] that also reports which sources fed the answer.
pub struct RetrievalQAWithSources {
    inner: RetrievalQA,
}

impl RetrievalQAWithSources {
    pub async fn invoke(&self, question: &str) -> Result<SourcedAnswer, ChainError> {
        let (answer, documents) = self.inner.call(question).await?;
        Ok(SourcedAnswer {
            answer,
            sources: collect_sources(&documents),
        })
    }
}

fn collect_sources(docs: &[Document]) -> Vec<String> {
    let mut sources = Vec::new();
    for doc in docs {
        if let Some(source) = doc.source() {
            if !sources.iter().any(|s| s == source) {
                sources.push(source.to_string());
            }
        }
    }
    sources
}

pub struct RetrievalQAWithSourcesBuilder {
    inner: RetrievalQABuilder,
}

impl RetrievalQAWithSourcesBuilder {
    pub fn new() -> Self {
        Self {
            inner: RetrievalQABuilder::new(),
        }
    }

    pub fn llm<L: Into<Box<dyn LLM>>>(mut self, llm: L) -> Self {
        self.inner = self.inner.llm(llm);
        self
    }

    pub fn retriever<R: Into<Box<dyn Retriever>>>(mut self, retriever: R) -> Self {
        self.inner = self.inner.retriever(retriever);
        self
    }

    pub fn prompt_template<S: Into<String>>(mut self, template: S) -> Self {
        self.inner = self.inner.prompt_template(template);
        self
    }

    pub fn build(self) -> Result<RetrievalQAWithSources, ChainError> {
        Ok(RetrievalQAWithSources {
            inner: self.inner.build()?,
        })
    }
}

impl Default for RetrievalQAWithSourcesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::language_models::FakeLLM;
    use crate::retrievers::RetrieverError;
    use crate::schemas::SOURCE_METADATA_KEY;

    struct FixedRetriever(Vec<Document>);

    #[async_trait]
    impl Retriever for FixedRetriever {
        async fn get_relevant_documents(
            &self,
            _query: &str,
        ) -> Result<Vec<Document>, RetrieverError> {
            Ok(self.0.clone())
        }
    }

    fn sourced(content: &str, source: &str) -> Document {
        let mut metadata = HashMap::new();
        metadata.insert(SOURCE_METADATA_KEY.to_string(), json!(source));
        Document::new(content).with_metadata(metadata)
    }

    #[tokio::test]
    async fn test_sources_are_deduplicated_in_order() {
        let chain = RetrievalQAWithSourcesBuilder::new()
            .llm(FakeLLM::with_response("yes"))
            .retriever(FixedRetriever(vec![
                sourced("cats are mammals", "animals.txt"),
                sourced("dogs are mammals", "animals.txt"),
                sourced("rocks are not alive", "geology.txt"),
                Document::new("no source here"),
            ]))
            .build()
            .unwrap();

        let result = chain.invoke("are cats mammals?").await.unwrap();
        assert_eq!(result.answer, "yes");
        assert_eq!(result.sources, vec!["animals.txt", "geology.txt"]);
    }
}
