pub mod llm;
pub use llm::*;

mod error;
pub use error::*;

mod fake_llm;
pub use fake_llm::*;
