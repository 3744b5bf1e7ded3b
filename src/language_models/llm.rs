use async_trait::async_trait;

use super::LLMError;

/// A language model invoked with a prompt, producing text.
///
/// The indexing layer treats models as opaque collaborators: it defines no
/// retry, timeout, or fallback policy of its own, and provider failures
/// propagate unchanged.
#[async_trait]
pub trait LLM: Sync + Send + LLMClone {
    async fn invoke(&self, prompt: &str) -> Result<String, LLMError>;

    /// Process several prompts in sequence. Implementations that can batch
    /// server-side may override this.
    async fn batch(&self, prompts: &[&str]) -> Result<Vec<Result<String, LLMError>>, LLMError> {
        let mut results = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            results.push(self.invoke(prompt).await);
        }
        Ok(results)
    }
}

pub trait LLMClone {
    fn clone_box(&self) -> Box<dyn LLM>;
}

impl<T> LLMClone for T
where
    T: 'static + LLM + Clone,
{
    fn clone_box(&self) -> Box<dyn LLM> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn LLM> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl<L> From<L> for Box<dyn LLM>
where
    L: 'static + LLM,
{
    fn from(llm: L) -> Self {
        Box::new(llm)
    }
}
