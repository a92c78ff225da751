//! Query option kinds and accumulated query parts.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// One of the seven OData system query options.
///
/// `Count` is never stored as a [`QueryPart`]; it is tracked as a separate
/// flag on [`QueryBuilder`](super::QueryBuilder) and only changes how the
/// final string is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryOption {
    #[serde(rename = "$filter")]
    Filter,
    #[serde(rename = "$orderby")]
    OrderBy,
    #[serde(rename = "$select")]
    Select,
    #[serde(rename = "$top")]
    Top,
    #[serde(rename = "$skip")]
    Skip,
    #[serde(rename = "$expand")]
    Expand,
    #[serde(rename = "$count")]
    Count,
}

impl QueryOption {
    /// Returns the query parameter name, including the leading `$`.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOption::Filter => "$filter",
            QueryOption::OrderBy => "$orderby",
            QueryOption::Select => "$select",
            QueryOption::Top => "$top",
            QueryOption::Skip => "$skip",
            QueryOption::Expand => "$expand",
            QueryOption::Count => "$count",
        }
    }
}

impl fmt::Display for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accumulated query option with its rendered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPart {
    pub option: QueryOption,
    pub value: String,
}

impl QueryPart {
    pub(crate) fn new(option: QueryOption, value: impl Into<String>) -> Self {
        Self {
            option,
            value: value.into(),
        }
    }

    /// Returns `true` for `$filter` parts, the only kind kept by count queries.
    pub fn is_filter(&self) -> bool {
        self.option == QueryOption::Filter
    }
}

/// Renders as `option=value`.
impl fmt::Display for QueryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.option, self.value)
    }
}

/// Field list accepted by [`QueryBuilder::select`](super::QueryBuilder::select).
///
/// Built from either an already delimited string or a sequence of names,
/// which is joined with `,`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields(String);

impl Fields {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Fields {
    fn from(fields: &str) -> Self {
        Fields(fields.to_string())
    }
}

impl From<String> for Fields {
    fn from(fields: String) -> Self {
        Fields(fields)
    }
}

impl<S: AsRef<str>> From<&[S]> for Fields {
    fn from(fields: &[S]) -> Self {
        Fields(join(fields))
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Fields {
    fn from(fields: [S; N]) -> Self {
        Fields(join(&fields))
    }
}

impl<S: AsRef<str>, const N: usize> From<&[S; N]> for Fields {
    fn from(fields: &[S; N]) -> Self {
        Fields(join(fields))
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Fields {
    fn from(fields: Vec<S>) -> Self {
        Fields(join(&fields))
    }
}

fn join<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
