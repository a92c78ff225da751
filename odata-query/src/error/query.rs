//! QueryError for strict query rendering

use crate::query::QueryOption;

use super::FilterError;

/// Errors reported by [`QueryBuilder::validate`] and [`QueryBuilder::try_build`].
///
/// [`QueryBuilder::validate`]: crate::query::QueryBuilder::validate
/// [`QueryBuilder::try_build`]: crate::query::QueryBuilder::try_build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The builder was created with an empty resource name.
    #[error("Resource name is empty")]
    EmptyResourceName,

    /// A query option carries an empty value.
    #[error("Empty value for {option}")]
    EmptyValue { option: QueryOption },

    /// An `$orderby` direction other than `asc` or `desc`.
    #[error("Invalid direction '{direction}' for field '{field}'")]
    InvalidDirection { field: String, direction: String },

    /// A `$top` or `$skip` value that is not a non-negative integer.
    #[error("Invalid {option} value '{value}': expected a non-negative integer")]
    InvalidPaging { option: QueryOption, value: String },

    /// A predicate built with [`FilterBuilder`](crate::query::FilterBuilder) is malformed.
    #[error("Invalid filter: {0}")]
    Filter(#[from] FilterError),
}

impl QueryError {
    /// Creates a new empty value error.
    pub fn empty_value(option: QueryOption) -> Self {
        Self::EmptyValue { option }
    }

    /// Creates a new invalid direction error.
    pub fn invalid_direction(field: impl Into<String>, direction: impl Into<String>) -> Self {
        Self::InvalidDirection {
            field: field.into(),
            direction: direction.into(),
        }
    }

    /// Creates a new invalid paging error.
    pub fn invalid_paging(option: QueryOption, value: impl Into<String>) -> Self {
        Self::InvalidPaging {
            option,
            value: value.into(),
        }
    }
}
