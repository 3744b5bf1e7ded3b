mod blocking;
mod similarity;

pub(crate) use blocking::*;
pub use similarity::*;
