use thiserror::Error;

use crate::chain::ChainError;
use crate::document_loaders::LoaderError;
use crate::embedding::EmbedderError;
use crate::text_splitter::TextSplitterError;
use crate::vectorstore::VectorStoreError;

/// Errors from index construction and querying.
///
/// Only `Configuration` originates here; every other variant is a collaborator
/// failure passed through unchanged so callers keep the original context.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    TextSplitter(#[from] TextSplitterError),

    #[error(transparent)]
    Embedder(#[from] EmbedderError),

    #[error(transparent)]
    VectorStore(#[from] VectorStoreError),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Runtime(#[from] std::io::Error),
}
