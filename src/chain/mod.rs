mod error;
pub use error::*;

mod retrieval_qa;
pub use retrieval_qa::*;

mod qa_with_sources;
pub use qa_with_sources::*;
