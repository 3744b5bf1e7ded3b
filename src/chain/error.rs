use thiserror::Error;

use crate::language_models::LLMError;
use crate::retrievers::RetrieverError;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error(transparent)]
    LLMError(#[from] LLMError),

    #[error(transparent)]
    RetrieverError(#[from] RetrieverError),

    #[error("Missing chain component: {0}")]
    MissingComponent(String),

    #[error("Error: {0}")]
    OtherError(String),
}
