//! Command implementations

mod score;
mod serve;

pub use score::{score, validate};
pub use serve::serve;
