//! OAS lint JUnit reporting library.
//!
//! This crate turns the rule-violation results of an OpenAPI specification
//! linter into a JUnit-compatible XML report suitable for CI ingestion
//! (GitLab, Jenkins). Findings are grouped into one synthetic test suite per
//! rule category, one test case per finding; cases for `error`/`warn`
//! findings carry a `failure` element, `info` findings do not.
//!
//! High-level modules:
//! - `models`: Input data model consumed from the linting engine (severity,
//!   rule, category, finding, result set).
//! - `junit`: JUnit wire structs, report composition, and XML rendering.
//!
//! Note: All documentation comments are written in English by convention.
pub mod junit;
pub mod models;

pub use junit::{build_report, compose_report, render_report, ReportError};
pub use models::category::{standard_categories, RuleCategory};
pub use models::{Rule, RuleResult, RuleResultSet, Severity};
