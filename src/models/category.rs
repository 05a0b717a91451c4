//! Rule categories and their fixed global ordering.
//!
//! Suite ordering in the JUnit output follows the order of the category
//! slice handed to the report builder, so that ordering must be stable
//! across runs. `standard_categories` returns the canonical list; callers
//! with a custom taxonomy can pass their own ordered slice instead.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
/// A fixed grouping of rules, with a stable id and a display name.
pub struct RuleCategory {
    pub id: String,
    pub name: String,
}

impl RuleCategory {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The canonical ordered category list used by the OAS linter.
pub fn standard_categories() -> Vec<RuleCategory> {
    vec![
        RuleCategory::new("examples", "Examples"),
        RuleCategory::new("operations", "Operations"),
        RuleCategory::new("information", "Information"),
        RuleCategory::new("descriptions", "Descriptions"),
        RuleCategory::new("schemas", "Schemas"),
        RuleCategory::new("security", "Security"),
        RuleCategory::new("tags", "Tags"),
        RuleCategory::new("validation", "Validation"),
        RuleCategory::new("owasp", "OWASP"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_categories_order_is_stable() {
        let cats = standard_categories();
        assert_eq!(cats.len(), 9);
        assert_eq!(cats[0].id, "examples");
        assert_eq!(cats[4].name, "Schemas");
        assert_eq!(cats[8].id, "owasp");
        // Two calls must agree so suite ordering is deterministic.
        assert_eq!(cats, standard_categories());
    }
}
