use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Model call failed: {0}")]
    ProviderError(String),

    #[error("Error: {0}")]
    OtherError(String),
}
