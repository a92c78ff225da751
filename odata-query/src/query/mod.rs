//! Query builders for OData query strings.
//!
//! Building a query is a two-step pipeline:
//!
//! - [`FilterBuilder`] composes the text of a `$filter` expression from
//!   field/operator/value triples and `and`/`or` connectors.
//! - [`QueryBuilder`] collects query options (`$filter`, `$orderby`,
//!   `$select`, `$top`, `$skip`, `$expand`) in call order and renders the
//!   final `name?option=value&...` string, or `name/$count?...` in count mode.
//!
//! A second [`QueryBuilder`] can be nested in an `$expand` clause with
//! [`QueryBuilder::expand_with`].
//!
//! # Example
//!
//! ```
//! use odata_query::query::{FilterBuilder, QueryBuilder};
//!
//! let query = QueryBuilder::new("Users")
//!     .filter(FilterBuilder::new().ge("Age", 18))
//!     .top(5)
//!     .count()
//!     .build();
//! assert_eq!(query, "Users/$count?$filter=Age ge 18");
//! ```

mod builder;
mod filter;
mod option;
mod order;
mod validate;

pub use builder::QueryBuilder;
pub use filter::Connector;
pub use filter::FilterBuilder;
pub use filter::Fragment;
pub use filter::Function;
pub use filter::Operator;
pub use option::Fields;
pub use option::QueryOption;
pub use option::QueryPart;
pub use order::Direction;
