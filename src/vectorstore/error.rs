use thiserror::Error;

use crate::embedding::EmbedderError;

#[derive(Error, Debug)]
pub enum VectorStoreError {
    #[error("This vector store does not support delete")]
    DeleteNotSupported,

    #[error(transparent)]
    EmbedderError(#[from] EmbedderError),

    #[error("Number of vectors ({vectors}) does not match number of documents ({documents})")]
    VectorDocumentMismatch { vectors: usize, documents: usize },

    #[error("Error: {0}")]
    OtherError(String),
}

impl From<String> for VectorStoreError {
    fn from(s: String) -> Self {
        VectorStoreError::OtherError(s)
    }
}

impl From<&str> for VectorStoreError {
    fn from(s: &str) -> Self {
        VectorStoreError::OtherError(s.to_string())
    }
}
