//! Retriever implementations.
//!
//! All retrievers implement the `Retriever` trait from `crate::schemas`.

mod error;
pub use error::*;

mod vectorstore_retriever;
pub use vectorstore_retriever::*;
