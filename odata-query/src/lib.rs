//! OData query string builder
//!
//! Renders filters, ordering, field selection, paging, nested expansion and
//! counting into an OData query string such as
//! `Users?$filter=Age gt 18&$top=5`. No I/O, no percent-encoding, and no
//! checks against service metadata.

pub mod error;
pub mod model;
pub mod query;

mod config;

pub use config::ValidationConfig;
pub use error::FilterError;
pub use error::QueryError;
pub use query::Direction;
pub use query::FilterBuilder;
pub use query::QueryBuilder;
