mod character_splitter;
mod error;
mod options;
mod text_splitter;
mod token_splitter;

pub use character_splitter::*;
pub use error::*;
pub use options::*;
pub use text_splitter::*;
pub use token_splitter::*;
