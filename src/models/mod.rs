//! Input data model consumed from the linting engine.
//!
//! The engine owns these values at runtime; this crate only reads them.
//! `RuleResultSet` is the entry point: it holds every finding of a lint run
//! and answers per-category queries in insertion order.

pub mod category;

use crate::models::category::RuleCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
/// Finding criticality tier. `error` and `warn` fail a report, `info` does not.
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    /// Canonical lowercase string form, matching the engine's wire values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }

    /// Whether a finding of this severity counts as a failed test case.
    pub fn is_failure(&self) -> bool {
        matches!(self, Severity::Error | Severity::Warn)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("unknown severity '{0}', expected error|warn|info")]
/// Returned when parsing a severity string the engine does not define.
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warn" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
/// A lint rule: identifier, severity, and the category it belongs to.
pub struct Rule {
    pub id: String,
    pub severity: Severity,
    pub category: RuleCategory,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// A single rule violation reported by the engine.
pub struct RuleResult {
    pub message: String,
    /// JSON-path-like location of the violation inside the linted document.
    pub path: String,
    pub rule: Rule,
    /// Originating file, when the engine resolved one.
    #[serde(default)]
    pub origin: Option<String>,
    /// Source line of the violation; reports fall back to 1 when absent.
    #[serde(default)]
    pub start_line: Option<usize>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
/// The full collection of findings from one lint run.
pub struct RuleResultSet {
    pub results: Vec<RuleResult>,
}

impl RuleResultSet {
    pub fn new(results: Vec<RuleResult>) -> Self {
        Self { results }
    }

    /// Findings belonging to the given category id, in insertion order.
    pub fn results_by_category(&self, category_id: &str) -> Vec<&RuleResult> {
        self.results
            .iter()
            .filter(|r| r.rule.category.id == category_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(rule_id: &str, severity: Severity, category_id: &str) -> RuleResult {
        RuleResult {
            message: "msg".into(),
            path: "$.x".into(),
            rule: Rule {
                id: rule_id.into(),
                severity,
                category: RuleCategory {
                    id: category_id.into(),
                    name: category_id.into(),
                },
            },
            origin: None,
            start_line: None,
        }
    }

    #[test]
    fn test_severity_failure_classification() {
        assert!(Severity::Error.is_failure());
        assert!(Severity::Warn.is_failure());
        assert!(!Severity::Info.is_failure());
    }

    #[test]
    fn test_severity_string_round_trip() {
        for sev in [Severity::Error, Severity::Warn, Severity::Info] {
            assert_eq!(sev.as_str().parse::<Severity>().unwrap(), sev);
            assert_eq!(sev.to_string(), sev.as_str());
        }
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_results_by_category_filters_and_keeps_order() {
        let rs = RuleResultSet::new(vec![
            result("a", Severity::Error, "schemas"),
            result("b", Severity::Info, "operations"),
            result("c", Severity::Warn, "schemas"),
        ]);
        let schemas = rs.results_by_category("schemas");
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0].rule.id, "a");
        assert_eq!(schemas[1].rule.id, "c");
        assert!(rs.results_by_category("tags").is_empty());
    }
}
