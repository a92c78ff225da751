//! OData query builder.

use std::fmt;

use crate::error::QueryError;
use crate::ValidationConfig;

use super::filter::FilterBuilder;
use super::option::Fields;
use super::option::QueryOption;
use super::option::QueryPart;
use super::order::Direction;
use super::validate;

/// Builder for OData query strings.
///
/// Query options are stored in call order and rendered in that order. Nothing
/// is merged or overwritten: calling [`filter`](Self::filter) twice produces
/// two `$filter` pairs.
///
/// # Example
///
/// ```
/// use odata_query::query::{Direction, FilterBuilder, QueryBuilder};
///
/// let orders = QueryBuilder::new("Orders")
///     .filter("Total gt 100");
///
/// let query = QueryBuilder::new("Users")
///     .filter(FilterBuilder::new().eq("Name", "John").and().gt("Age", 21))
///     .order_by("Name", Direction::Desc)
///     .select(["Name", "Age"])
///     .top(10)
///     .expand_with("Orders", &orders)
///     .build();
///
/// assert_eq!(
///     query,
///     "Users?$filter=Name eq 'John' and Age gt 21&$orderby=Name desc\
///      &$select=Name,Age&$top=10&$expand=Orders($filter=Total gt 100)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    name: String,
    parts: Vec<QueryPart>,
    count: bool,
}

impl QueryBuilder {
    /// Creates a new query builder for the given resource.
    ///
    /// The name is not checked; see [`validate`](Self::validate).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
            count: false,
        }
    }

    fn push(mut self, option: QueryOption, value: impl Into<String>) -> Self {
        self.parts.push(QueryPart::new(option, value));
        self
    }

    /// Appends a `$filter` part.
    ///
    /// Accepts plain text or a [`FilterBuilder`](super::FilterBuilder). The
    /// text is not parsed.
    pub fn filter(self, condition: impl Into<String>) -> Self {
        self.push(QueryOption::Filter, condition)
    }

    /// Validates `filter` with [`FilterBuilder::try_build`] and appends it.
    ///
    /// [`FilterBuilder::try_build`]: super::FilterBuilder::try_build
    pub fn try_filter(self, filter: &FilterBuilder) -> Result<Self, QueryError> {
        let condition = filter.try_build()?;
        Ok(self.filter(condition))
    }

    /// Appends an `$orderby` part rendered as `field direction`.
    ///
    /// Pass a [`Direction`] for `asc`/`desc`. Any other string is written
    /// verbatim.
    pub fn order_by(self, field: impl AsRef<str>, direction: impl AsRef<str>) -> Self {
        let value = format!("{} {}", field.as_ref(), direction.as_ref());
        self.push(QueryOption::OrderBy, value)
    }

    /// Appends an ascending `$orderby` part.
    pub fn order_by_asc(self, field: impl AsRef<str>) -> Self {
        self.order_by(field, Direction::Asc)
    }

    /// Appends a descending `$orderby` part.
    pub fn order_by_desc(self, field: impl AsRef<str>) -> Self {
        self.order_by(field, Direction::Desc)
    }

    /// Appends a `$select` part.
    ///
    /// Sequences are joined with `,`; strings are stored as given.
    pub fn select(self, fields: impl Into<Fields>) -> Self {
        self.push(QueryOption::Select, fields.into().into_string())
    }

    /// Appends a `$top` part. The value is not range checked.
    pub fn top(self, n: impl fmt::Display) -> Self {
        self.push(QueryOption::Top, n.to_string())
    }

    /// Appends a `$skip` part. The value is not range checked.
    pub fn skip(self, n: impl fmt::Display) -> Self {
        self.push(QueryOption::Skip, n.to_string())
    }

    /// Appends a bare `$expand` part for a related entity.
    pub fn expand(self, entity: impl Into<String>) -> Self {
        self.push(QueryOption::Expand, entity)
    }

    /// Appends an `$expand` part with nested query options.
    ///
    /// The nested builder is rendered with
    /// [`build_query_only`](Self::build_query_only) and embedded as
    /// `entity(options)`. Only the text is copied; `nested` is left untouched.
    /// If `nested` has no parts this is the same as [`expand`](Self::expand).
    pub fn expand_with(self, entity: impl Into<String>, nested: &QueryBuilder) -> Self {
        let entity = entity.into();
        if nested.is_empty() {
            log::debug!(
                "Nested query for '{}' has no options, expanding without them",
                entity
            );
            return self.expand(entity);
        }
        let value = format!("{}({})", entity, nested.build_query_only());
        self.push(QueryOption::Expand, value)
    }

    /// Switches rendering to `name/$count`, keeping only `$filter` parts.
    ///
    /// Does not append a part. Calling it more than once has no further
    /// effect.
    pub fn count(mut self) -> Self {
        self.count = true;
        self
    }

    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accumulated parts in append order.
    pub fn parts(&self) -> &[QueryPart] {
        &self.parts
    }

    /// Returns `true` if [`count`](Self::count) was called.
    pub fn is_count(&self) -> bool {
        self.count
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Renders every part as `option=value`, joined by `&`.
    ///
    /// No resource name, no leading `?`, and count mode is ignored. This is
    /// the form embedded by [`expand_with`](Self::expand_with).
    pub fn build_query_only(&self) -> String {
        join(self.parts.iter())
    }

    /// Renders the full query.
    ///
    /// Without count mode this is `name?options`, and `name?` when no parts
    /// were added. With count mode it is `name/$count?filters`, where only
    /// `$filter` parts are kept and each keeps its own pair.
    pub fn build(&self) -> String {
        let query = if self.count {
            format!(
                "{}/{}?{}",
                self.name,
                QueryOption::Count,
                join(self.parts.iter().filter(|part| part.is_filter()))
            )
        } else {
            format!("{}?{}", self.name, self.build_query_only())
        };
        log::trace!("Built query: {}", query);
        query
    }

    /// Checks the accumulated state against `config`.
    ///
    /// Returns the first violation found, in append order after the resource
    /// name check.
    pub fn validate(&self, config: &ValidationConfig) -> Result<(), QueryError> {
        validate::query(self, config)
    }

    /// Validates with [`ValidationConfig::strict`] and renders.
    pub fn try_build(&self) -> Result<String, QueryError> {
        if let Err(err) = self.validate(&ValidationConfig::strict()) {
            log::debug!("Rejected query for '{}': {}", self.name, err);
            return Err(err);
        }
        Ok(self.build())
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a QueryPart>) -> String {
    parts
        .map(QueryPart::to_string)
        .collect::<Vec<_>>()
        .join("&")
}
