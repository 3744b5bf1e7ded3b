mod document;
pub use document::*;

mod retrievers;
pub use retrievers::*;
