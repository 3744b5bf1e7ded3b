use thiserror::Error;

use crate::vectorstore::VectorStoreError;

#[derive(Error, Debug)]
pub enum RetrieverError {
    #[error(transparent)]
    VectorStoreError(#[from] VectorStoreError),

    #[error("Error: {0}")]
    OtherError(String),
}
