//! Typed models

mod value;

pub(crate) use value::quote;
pub use value::Value;
