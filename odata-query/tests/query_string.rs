//! End-to-end tests for rendered query strings.
//!
//! These exercise the public API only. A debug logger is installed so the
//! expand fallback and strict-mode rejections show up with `--nocapture`.

use odata_query::query::QueryPart;
use odata_query::{Direction, FilterBuilder, QueryBuilder, QueryError, ValidationConfig};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn init_logger() {
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());
}

// =============================================================================
// Filter expressions
// =============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_fragments_join_in_call_order() {
        init_logger();
        let filter = FilterBuilder::new()
            .starts_with("Name", "A")
            .and()
            .equal("Active", true)
            .or()
            .less_than_or_equal("Score", 2.5)
            .build();
        assert_eq!(filter, "startswith(Name, 'A') and Active eq true or Score le 2.5");
    }

    #[test]
    fn test_quoting_follows_value_type() {
        assert_eq!(FilterBuilder::new().equal("Age", 30).build(), "Age eq 30");
        assert_eq!(FilterBuilder::new().equal("Name", "Jo").build(), "Name eq 'Jo'");
        assert_eq!(FilterBuilder::new().equal("Code", "30").build(), "Code eq '30'");
        assert_eq!(FilterBuilder::new().contains("Code", 30).build(), "contains(Code, '30')");
    }

    #[test]
    fn test_builder_can_be_extended_after_build() {
        let filter = FilterBuilder::new().greater_than("Age", 18);
        let first = filter.build();
        let filter = filter.and().not_equal("Status", "closed");
        assert_eq!(first, "Age gt 18");
        assert_eq!(filter.build(), "Age gt 18 and Status ne 'closed'");
    }
}

// =============================================================================
// Query strings
// =============================================================================

mod queries {
    use super::*;

    #[test]
    fn test_full_query() {
        init_logger();
        let filter = FilterBuilder::new().equal("Name", "John").and().greater_than("Age", 21);
        let query = QueryBuilder::new("Users")
            .filter(filter)
            .order_by("Age", Direction::Desc)
            .select(vec!["Name", "Age"])
            .top(10)
            .skip(20)
            .build();
        assert_eq!(
            query,
            "Users?$filter=Name eq 'John' and Age gt 21&$orderby=Age desc&$select=Name,Age&$top=10&$skip=20"
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(QueryBuilder::new("Users").build(), "Users?");
        assert_eq!(QueryBuilder::new("").build(), "?");
    }

    #[test]
    fn test_count_query() {
        init_logger();
        let query = QueryBuilder::new("Users")
            .filter("Age gt 18")
            .top(5)
            .count()
            .order_by_asc("Name")
            .build();
        assert_eq!(query, "Users/$count?$filter=Age gt 18");
    }

    #[test]
    fn test_count_keeps_parts_for_partial_render() {
        let query = QueryBuilder::new("Users").filter("A eq 1").top(5).count();
        assert_eq!(query.build_query_only(), "$filter=A eq 1&$top=5");
        assert_eq!(query.parts().len(), 2);
    }

    #[test]
    fn test_same_calls_render_identically() {
        let make = || QueryBuilder::new("Users").skip(5).filter("A eq 1").select("A");
        assert_eq!(make().build(), make().build());

        let reordered = QueryBuilder::new("Users").filter("A eq 1").skip(5).select("A");
        assert_ne!(make().build(), reordered.build());
        assert_eq!(reordered.build(), "Users?$filter=A eq 1&$skip=5&$select=A");
    }

    #[test]
    fn test_parts_are_inspectable() {
        let query = QueryBuilder::new("Users").select(["A", "B"]).expand("Orders");
        let values: Vec<&str> = query.parts().iter().map(|p: &QueryPart| p.value.as_str()).collect();
        assert_eq!(values, ["A,B", "Orders"]);
        assert_eq!(query.name(), "Users");
    }
}

// =============================================================================
// Nested expansion
// =============================================================================

mod expansion {
    use super::*;

    #[test]
    fn test_nested_builder_is_not_consumed() {
        init_logger();
        let orders = QueryBuilder::new("Orders").filter("Total gt 100");
        let before = orders.build();

        let users = QueryBuilder::new("Users").expand_with("Orders", &orders);
        assert_eq!(users.build(), "Users?$expand=Orders($filter=Total gt 100)");
        assert_eq!(orders.build(), before);
    }

    #[test]
    fn test_empty_nested_builder_degrades_to_bare_expand() {
        init_logger();
        let empty = QueryBuilder::new("Orders");
        assert_eq!(
            QueryBuilder::new("Users").expand_with("Orders", &empty).build(),
            QueryBuilder::new("Users").expand("Orders").build()
        );
    }

    #[test]
    fn test_nested_count_mode_is_ignored() {
        let nested = QueryBuilder::new("Items").select("Id").count();
        let query = QueryBuilder::new("Orders").expand_with("Items", &nested).build();
        assert_eq!(query, "Orders?$expand=Items($select=Id)");
    }

    #[test]
    fn test_multi_level_nesting() {
        let items = QueryBuilder::new("Items").select(["Id", "Sku"]).top(3);
        let orders = QueryBuilder::new("Orders")
            .filter(FilterBuilder::new().greater_than("Total", 100))
            .expand_with("Items", &items);
        let query = QueryBuilder::new("Users")
            .select("Name")
            .expand_with("Orders", &orders)
            .build();
        assert_eq!(
            query,
            "Users?$select=Name&$expand=Orders($filter=Total gt 100&$expand=Items($select=Id,Sku&$top=3))"
        );
    }
}

// =============================================================================
// Strict mode
// =============================================================================

mod strict {
    use super::*;

    #[test]
    fn test_try_build_matches_build_when_valid() {
        let query = QueryBuilder::new("Users").filter("A eq 1").order_by_desc("A").top(1);
        assert_eq!(query.try_build().unwrap(), query.build());
    }

    #[test]
    fn test_try_build_rejects_what_build_accepts() {
        init_logger();
        let query = QueryBuilder::new("Users").order_by("Name", "upward");
        assert_eq!(query.build(), "Users?$orderby=Name upward");
        assert_eq!(
            query.try_build(),
            Err(QueryError::invalid_direction("Name", "upward"))
        );
    }

    #[test]
    fn test_try_filter_propagates_filter_errors() {
        let result = QueryBuilder::new("Users").try_filter(&FilterBuilder::new());
        assert!(matches!(result, Err(QueryError::Filter(_))));
    }

    #[test]
    fn test_custom_config() {
        let config = ValidationConfig::permissive().with_non_negative_paging(true);
        let query = QueryBuilder::new("").top(-3);
        assert!(query.validate(&config).is_err());
        assert!(query.validate(&ValidationConfig::permissive()).is_ok());
    }
}
