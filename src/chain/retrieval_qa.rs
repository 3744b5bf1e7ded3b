use super::ChainError;
use crate::language_models::LLM;
use crate::schemas::{Document, Retriever};

pub(crate) const DEFAULT_QA_TEMPLATE: &str = "Use the following pieces of context to answer \
the question at the end. If you don't know the answer, just say that you don't know, don't \
try to make up an answer.\n\n{context}\n\nQuestion: {question}\nHelpful Answer:";

pub(crate) fn format_qa_prompt(template: &str, context: &str, question: &str) -> String {
    template
        .replace("{context}", context)
        .replace("{question}", question)
}

pub(crate) fn stuff_documents(docs: &[Document]) -> String {
    docs.iter()
        .map(|d| d.page_content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Retrieval-augmented QA: retrieve top documents for the question, stuff them
/// into the prompt, and return the model's answer text.
pub struct RetrievalQA {
    llm: Box<dyn LLM>,
    retriever: Box<dyn Retriever>,
    prompt_template: String,
}

impl RetrievalQA {
    /// Retrieved documents and the answer produced from them.
    pub(crate) async fn call(&self, question: &str) -> Result<(String, Vec<Document>), ChainError> {
        let documents = self.retriever.get_relevant_documents(question).await?;
        let context = stuff_documents(&documents);
        let prompt = format_qa_prompt(&self.prompt_template, &context, question);
        let answer = self.llm.invoke(&prompt).await?;
        Ok((answer, documents))
    }

    pub async fn invoke(&self, question: &str) -> Result<String, ChainError> {
        let (answer, _) = self.call(question).await?;
        Ok(answer)
    }
}

pub struct RetrievalQABuilder {
    llm: Option<Box<dyn LLM>>,
    retriever: Option<Box<dyn Retriever>>,
    prompt_template: String,
}

impl RetrievalQABuilder {
    pub fn new() -> Self {
        Self {
            llm: None,
            retriever: None,
            prompt_template: DEFAULT_QA_TEMPLATE.to_string(),
        }
    }

    pub fn llm<L: Into<Box<dyn LLM>>>(mut self, llm: L) -> Self {
        self.llm = Some(llm.into());
        self
    }

    pub fn retriever<R: Into<Box<dyn Retriever>>>(mut self, retriever: R) -> Self {
        self.retriever = Some(retriever.into());
        self
    }

    /// Override the QA prompt. The template must contain `{context}` and
    /// `{question}` placeholders.
    pub fn prompt_template<S: Into<String>>(mut self, template: S) -> Self {
        self.prompt_template = template.into();
        self
    }

    pub fn build(self) -> Result<RetrievalQA, ChainError> {
        let llm = self
            .llm
            .ok_or_else(|| ChainError::MissingComponent("llm".to_string()))?;
        let retriever = self
            .retriever
            .ok_or_else(|| ChainError::MissingComponent("retriever".to_string()))?;
        Ok(RetrievalQA {
            llm,
            retriever,
            prompt_template: self.prompt_template,
        })
    }
}

impl Default for RetrievalQABuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::language_models::FakeLLM;
    use crate::retrievers::RetrieverError;

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

    #[tokio::test]
    async fn test_retrieval_qa_stuffs_context() {
        let llm = FakeLLM::with_response("yes");
        let chain = RetrievalQABuilder::new()
            .llm(llm.clone())
            .retriever(FixedRetriever(vec![
                Document::new("cats are mammals"),
                Document::new("dogs are mammals"),
            ]))
            .build()
            .unwrap();

        let answer = chain.invoke("are cats mammals?").await.unwrap();
        assert_eq!(answer, "yes");

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("cats are mammals"));
        assert!(calls[0].contains("dogs are mammals"));
        assert!(calls[0].contains("are cats mammals?"));
    }

    #[test]
    fn test_builder_requires_llm_and_retriever() {
        let missing_llm = RetrievalQABuilder::new()
            .retriever(FixedRetriever(vec![]))
            .build();
        assert!(matches!(missing_llm, Err(ChainError::MissingComponent(_))));

        let missing_retriever = RetrievalQABuilder::new()
            .llm(FakeLLM::with_response("x"))
            .build();
        assert!(matches!(
            missing_retriever,
            Err(ChainError::MissingComponent(_))
        ));
    }
}
