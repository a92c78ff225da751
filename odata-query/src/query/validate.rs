//! Strict-mode checks for accumulated query parts.

use crate::error::QueryError;
use crate::ValidationConfig;

use super::builder::QueryBuilder;
use super::option::QueryOption;
use super::option::QueryPart;
use super::order::Direction;

pub(super) fn query(builder: &QueryBuilder, config: &ValidationConfig) -> Result<(), QueryError> {
    if config.require_resource_name && builder.name().trim().is_empty() {
        return Err(QueryError::EmptyResourceName);
    }
    builder.parts().iter().try_for_each(|part| check_part(part, config))
}

fn check_part(part: &QueryPart, config: &ValidationConfig) -> Result<(), QueryError> {
    match part.option {
        QueryOption::Filter | QueryOption::Select | QueryOption::Expand => {
            if config.require_values && part.value.trim().is_empty() {
                return Err(QueryError::empty_value(part.option));
            }
        }
        QueryOption::OrderBy => {
            let (field, direction) = part.value.rsplit_once(' ').unwrap_or((part.value.as_str(), ""));
            if config.require_values && field.trim().is_empty() {
                return Err(QueryError::empty_value(part.option));
            }
            if config.require_known_direction && Direction::parse(direction).is_none() {
                return Err(QueryError::invalid_direction(field, direction));
            }
        }
        QueryOption::Top | QueryOption::Skip => {
            if config.require_non_negative_paging && part.value.parse::<u64>().is_err() {
                return Err(QueryError::invalid_paging(part.option, part.value.as_str()));
            }
        }
        // Never stored as a part.
        QueryOption::Count => {}
    }
    Ok(())
}
