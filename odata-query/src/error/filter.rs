//! FilterError for strict predicate rendering

/// Structural problems found by [`FilterBuilder::try_build`].
///
/// Positions are zero-based fragment indices.
///
/// [`FilterBuilder::try_build`]: crate::query::FilterBuilder::try_build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// No fragments were appended.
    #[error("Filter expression is empty")]
    Empty,

    /// The expression starts with `and`/`or`.
    #[error("Filter expression starts with connector '{connector}'")]
    LeadingConnector { connector: &'static str },

    /// The expression ends with `and`/`or`.
    #[error("Filter expression ends with connector '{connector}'")]
    TrailingConnector { connector: &'static str },

    /// Two connectors follow each other.
    #[error("Adjacent connectors at fragment {position}")]
    AdjacentConnectors { position: usize },

    /// Two predicates follow each other without a connector.
    #[error("Missing connector before fragment {position}")]
    MissingConnector { position: usize },

    /// A predicate was given an empty field name.
    #[error("Empty field name in fragment {position}")]
    EmptyField { position: usize },
}
