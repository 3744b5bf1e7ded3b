mod error;
mod factory;
mod options;
mod vectorstore;

#[cfg(feature = "in-memory")]
pub mod in_memory;

pub use error::*;
pub use factory::*;
pub use options::*;
pub use vectorstore::*;
