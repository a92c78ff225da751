//! Validation configuration

/// Controls which checks [`QueryBuilder::validate`] performs.
///
/// The default is permissive: every check is off, matching what
/// [`QueryBuilder::build`] accepts.
///
/// # Example
///
/// ```
/// use odata_query::ValidationConfig;
///
/// let config = ValidationConfig::strict()
///     .with_known_direction(false);
/// ```
///
/// [`QueryBuilder::validate`]: crate::query::QueryBuilder::validate
/// [`QueryBuilder::build`]: crate::query::QueryBuilder::build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject an empty resource name.
    pub require_resource_name: bool,

    /// Reject empty `$filter`, `$select` and `$expand` values and empty
    /// `$orderby` fields.
    pub require_values: bool,

    /// Reject `$orderby` directions other than `asc` and `desc`.
    pub require_known_direction: bool,

    /// Reject `$top` and `$skip` values that are not non-negative integers.
    pub require_non_negative_paging: bool,
}

impl ValidationConfig {
    /// Creates a permissive config.
    pub fn new() -> Self {
        Self::default()
    }

    /// All checks off.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// All checks on.
    pub fn strict() -> Self {
        Self {
            require_resource_name: true,
            require_values: true,
            require_known_direction: true,
            require_non_negative_paging: true,
        }
    }

    /// Sets the resource name check.
    pub fn with_resource_name(mut self, enabled: bool) -> Self {
        self.require_resource_name = enabled;
        self
    }

    /// Sets the empty value check.
    pub fn with_values(mut self, enabled: bool) -> Self {
        self.require_values = enabled;
        self
    }

    /// Sets the direction check.
    pub fn with_known_direction(mut self, enabled: bool) -> Self {
        self.require_known_direction = enabled;
        self
    }

    /// Sets the paging check.
    pub fn with_non_negative_paging(mut self, enabled: bool) -> Self {
        self.require_non_negative_paging = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ValidationConfig::new(), ValidationConfig::permissive());
        assert!(!ValidationConfig::permissive().require_values);

        let strict = ValidationConfig::strict();
        assert!(strict.require_resource_name);
        assert!(strict.require_non_negative_paging);
    }

    #[test]
    fn test_setters() {
        let config = ValidationConfig::strict().with_known_direction(false);
        assert!(!config.require_known_direction);
        assert!(config.require_values);
    }
}
