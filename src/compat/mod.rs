//! Versioned-namespace resolution for persisted objects.
//!
//! Serialized envelopes record the namespace path of the type that produced
//! them. When types move between releases, [`resolve`] maps the recorded path
//! to the current one; [`upgrade_envelope`] applies that mapping to a whole
//! serialized value at load time. A miss means the path never moved and is
//! used as-is.

mod load;
pub use load::*;

pub mod mapping;

mod resolver;
pub use resolver::*;
