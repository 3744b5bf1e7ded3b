use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{LLMError, LLM};

/// Canned-response model for tests and offline demos.
///
/// Records every prompt it is invoked with so tests can assert on the
/// retrieval context that was stuffed into the prompt.
#[derive(Clone)]
pub struct FakeLLM {
    response: String,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeLLM {
    pub fn with_response<S: Into<String>>(response: S) -> Self {
        FakeLLM {
            response: response.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts seen so far, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LLM for FakeLLM {
    async fn invoke(&self, prompt: &str) -> Result<String, LLMError> {
        self.calls
            .lock()
            .map_err(|e| LLMError::OtherError(e.to_string()))?
            .push(prompt.to_string());
        Ok(self.response.clone())
    }
}
