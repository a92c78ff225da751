//! Error types

mod filter;
mod query;

pub use filter::*;
pub use query::*;
