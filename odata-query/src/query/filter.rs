//! Filter expression builder for `$filter`.

use std::fmt;

use crate::error::FilterError;
use crate::model::quote;
use crate::model::Value;

/// Comparison operators usable in a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Ge => "ge",
            Operator::Le => "le",
        }
    }
}

/// String matching functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Contains,
    StartsWith,
    EndsWith,
}

impl Function {
    pub fn as_str(&self) -> &'static str {
        match self {
            Function::Contains => "contains",
            Function::StartsWith => "startswith",
            Function::EndsWith => "endswith",
        }
    }
}

/// Logical connectors placed between predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
        }
    }
}

/// One textual unit of a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// `field op value`
    Comparison {
        field: String,
        op: Operator,
        value: Value,
    },
    /// `function(field, 'value')`, always quoted.
    Function {
        function: Function,
        field: String,
        value: String,
    },
    /// Bare `and` / `or`.
    Connector(Connector),
    /// Caller-supplied text (escape hatch).
    Raw(String),
}

impl Fragment {
    /// Returns `true` for `and` / `or`.
    pub fn is_connector(&self) -> bool {
        matches!(self, Fragment::Connector(_))
    }

    fn field(&self) -> Option<&str> {
        match self {
            Fragment::Comparison { field, .. } | Fragment::Function { field, .. } => Some(field),
            Fragment::Connector(_) | Fragment::Raw(_) => None,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Comparison { field, op, value } => {
                write!(f, "{} {} {}", field, op.as_str(), value.to_odata())
            }
            Fragment::Function {
                function,
                field,
                value,
            } => write!(f, "{}({}, {})", function.as_str(), field, quote(value)),
            Fragment::Connector(c) => f.write_str(c.as_str()),
            Fragment::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Builder for `$filter` expressions.
///
/// Every method appends exactly one fragment. Fragments are rendered in
/// append order and joined by single spaces. Nothing is grouped or
/// reordered: the caller places `and`/`or` where they belong.
///
/// # Example
///
/// ```
/// use odata_query::query::FilterBuilder;
///
/// let filter = FilterBuilder::new()
///     .eq("Name", "John")
///     .and()
///     .gt("Age", 21)
///     .build();
/// assert_eq!(filter, "Name eq 'John' and Age gt 21");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBuilder {
    fragments: Vec<Fragment>,
}

impl FilterBuilder {
    /// Creates an empty filter builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    fn compare(self, field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        self.push(Fragment::Comparison {
            field: field.into(),
            op,
            value: value.into(),
        })
    }

    fn function(self, function: Function, field: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(Fragment::Function {
            function,
            field: field.into(),
            value: value.to_string(),
        })
    }

    /// Appends `contains(field, 'value')`.
    pub fn contains(self, field: impl Into<String>, value: impl fmt::Display) -> Self {
        self.function(Function::Contains, field, value)
    }

    /// Appends `startswith(field, 'value')`.
    pub fn starts_with(self, field: impl Into<String>, value: impl fmt::Display) -> Self {
        self.function(Function::StartsWith, field, value)
    }

    /// Appends `endswith(field, 'value')`.
    pub fn ends_with(self, field: impl Into<String>, value: impl fmt::Display) -> Self {
        self.function(Function::EndsWith, field, value)
    }

    /// Appends `field eq value`.
    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(field, Operator::Eq, value)
    }

    /// Appends `field ne value`.
    pub fn ne(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(field, Operator::Ne, value)
    }

    /// Appends `field gt value`.
    pub fn gt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(field, Operator::Gt, value)
    }

    /// Appends `field lt value`.
    pub fn lt(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(field, Operator::Lt, value)
    }

    /// Appends `field ge value`.
    pub fn ge(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(field, Operator::Ge, value)
    }

    /// Appends `field le value`.
    pub fn le(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(field, Operator::Le, value)
    }

    /// Same as [`eq`](Self::eq).
    pub fn equal(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.eq(field, value)
    }

    /// Same as [`ne`](Self::ne).
    pub fn not_equal(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ne(field, value)
    }

    /// Same as [`gt`](Self::gt).
    pub fn greater_than(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.gt(field, value)
    }

    /// Same as [`lt`](Self::lt).
    pub fn less_than(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.lt(field, value)
    }

    /// Same as [`ge`](Self::ge).
    pub fn greater_than_or_equal(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.ge(field, value)
    }

    /// Same as [`le`](Self::le).
    pub fn less_than_or_equal(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.le(field, value)
    }

    /// Appends the bare `and` token.
    pub fn and(self) -> Self {
        self.push(Fragment::Connector(Connector::And))
    }

    /// Appends the bare `or` token.
    pub fn or(self) -> Self {
        self.push(Fragment::Connector(Connector::Or))
    }

    /// Appends caller text as-is.
    ///
    /// Use this for expressions the typed methods don't cover, such as
    /// `not (...)` or a parenthesized group built by another `FilterBuilder`.
    pub fn raw(self, text: impl Into<String>) -> Self {
        self.push(Fragment::Raw(text.into()))
    }

    /// Returns the accumulated fragments in append order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Renders the expression.
    ///
    /// Returns an empty string if nothing was appended. The builder keeps its
    /// fragments and can be extended and rendered again.
    pub fn build(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Checks that predicates and connectors alternate.
    ///
    /// This is stricter than [`build`](Self::build), which accepts any
    /// sequence. Raw fragments count as predicates.
    pub fn validate(&self) -> Result<(), FilterError> {
        let first = self.fragments.first().ok_or(FilterError::Empty)?;
        if let Fragment::Connector(c) = first {
            return Err(FilterError::LeadingConnector {
                connector: c.as_str(),
            });
        }
        if let Some(Fragment::Connector(c)) = self.fragments.last() {
            return Err(FilterError::TrailingConnector {
                connector: c.as_str(),
            });
        }

        let mut previous_was_connector = true;
        for (position, fragment) in self.fragments.iter().enumerate() {
            if fragment.field().is_some_and(|field| field.trim().is_empty()) {
                return Err(FilterError::EmptyField { position });
            }
            match (previous_was_connector, fragment.is_connector()) {
                (true, true) => return Err(FilterError::AdjacentConnectors { position }),
                (false, false) => return Err(FilterError::MissingConnector { position }),
                _ => {}
            }
            previous_was_connector = fragment.is_connector();
        }
        Ok(())
    }

    /// Validates and renders the expression.
    pub fn try_build(&self) -> Result<String, FilterError> {
        if let Err(err) = self.validate() {
            log::debug!("Rejected filter expression '{}': {}", self, err);
            return Err(err);
        }
        Ok(self.build())
    }
}

impl fmt::Display for FilterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<FilterBuilder> for String {
    fn from(filter: FilterBuilder) -> Self {
        filter.build()
    }
}

impl From<&FilterBuilder> for String {
    fn from(filter: &FilterBuilder) -> Self {
        filter.build()
    }
}
