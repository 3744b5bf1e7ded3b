//! Unified error handling.
//!
//! Every module defines its own `thiserror` enum; this module provides the
//! top-level enum they all convert into, for callers that want a single error
//! type at the crate boundary.

pub use crate::chain::ChainError;
pub use crate::document_loaders::LoaderError;
pub use crate::embedding::EmbedderError;
pub use crate::indexing::IndexError;
pub use crate::language_models::LLMError;
pub use crate::retrievers::RetrieverError;
pub use crate::text_splitter::TextSplitterError;
pub use crate::vectorstore::VectorStoreError;

/// Top-level error type combining all module errors.
#[derive(thiserror::Error, Debug)]
pub enum DocIndexError {
    #[error("LLM error: {0}")]
    LLMError(#[from] LLMError),

    #[error("Embedder error: {0}")]
    EmbedderError(#[from] EmbedderError),

    #[error("Chain error: {0}")]
    ChainError(#[from] ChainError),

    #[error("Vector store error: {0}")]
    VectorStoreError(#[from] VectorStoreError),

    #[error("Retriever error: {0}")]
    RetrieverError(#[from] RetrieverError),

    #[error("Text splitter error: {0}")]
    TextSplitterError(#[from] TextSplitterError),

    #[error("Loader error: {0}")]
    LoaderError(#[from] LoaderError),

    #[error("Index error: {0}")]
    IndexError(#[from] IndexError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocIndexError>;
