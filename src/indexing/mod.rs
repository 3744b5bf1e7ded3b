//! Index construction and querying.
//!
//! [`VectorStoreIndexCreator`] turns documents or loaders into a populated
//! vector store; [`VectorStoreIndexWrapper`] is the resulting query-capable
//! handle.

mod creator;
pub use creator::*;

mod error;
pub use error::*;

mod wrapper;
pub use wrapper::*;
