pub mod embedder_trait;
pub use embedder_trait::*;

mod error;
pub use error::*;

mod fake_embedder;
pub use fake_embedder::*;
