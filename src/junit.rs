//! JUnit XML report building for lint results.
//!
//! Findings are grouped into one `testsuite` per rule category (categories
//! with no findings are skipped), with one `testcase` per finding. Cases for
//! `error`/`warn` findings carry a `failure` element; `info` cases do not
//! and never count towards failure totals. Suite ordering follows the
//! category slice passed by the caller, so identical input always renders
//! identical suite order.
//!
//! `compose_report` is pure and independently testable; `render_report`
//! serializes to XML; `build_report` combines both behind the fail-closed
//! contract expected by callers (empty bytes on any encoding error, never
//! partial output).

use crate::models::category::RuleCategory;
use crate::models::{RuleResult, RuleResultSet, Severity};
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Longest emitted `testcase` name, in characters, before truncation.
const MAX_CASE_NAME: usize = 200;

#[derive(Error, Debug)]
/// Errors raised while rendering a report. Only XML encoding can fail;
/// composition itself is infallible.
pub enum ReportError {
    #[error("failed to encode JUnit XML: {0}")]
    Xml(#[from] quick_xml::SeError),
}

#[derive(Serialize, Deserialize, Debug)]
/// Report root: the `testsuites` element.
pub struct TestSuites {
    #[serde(rename = "@tests")]
    pub tests: usize,
    #[serde(rename = "@failures")]
    pub failures: usize,
    #[serde(rename = "@time", serialize_with = "serialize_seconds")]
    pub time: f64,
    #[serde(rename = "testsuite", default)]
    pub suites: Vec<TestSuite>,
}

#[derive(Serialize, Deserialize, Debug)]
/// One `testsuite` element, covering a single rule category.
pub struct TestSuite {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@tests")]
    pub tests: usize,
    #[serde(rename = "@failures")]
    pub failures: usize,
    #[serde(rename = "@time", serialize_with = "serialize_seconds")]
    pub time: f64,
    #[serde(rename = "testcase", default)]
    pub cases: Vec<TestCase>,
}

#[derive(Serialize, Deserialize, Debug)]
/// One `testcase` element, covering a single finding.
pub struct TestCase {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@classname")]
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

#[derive(Serialize, Deserialize, Debug)]
/// The `failure` element attached to `error`/`warn` cases.
pub struct Failure {
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "$text")]
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug)]
/// Diagnostic key/value metadata attached to every case.
pub struct Properties {
    #[serde(rename = "property", default)]
    pub properties: Vec<Property>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Property {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

impl Property {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Render `time` attributes with fixed 4-decimal precision (e.g. `0.0050`).
fn serialize_seconds<S: serde::Serializer>(secs: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.4}", secs))
}

/// Build the JUnit report and serialize it, fail-closed.
///
/// Elapsed time is taken once from `started` and stamped identically on the
/// root and every suite. `fallback_args[0]`, when present, names the linted
/// file for findings that carry no origin of their own. Any encoding error
/// yields empty bytes; callers must treat an empty result as "report
/// generation failed".
pub fn build_report(
    result_set: &RuleResultSet,
    categories: &[RuleCategory],
    started: Instant,
    fallback_args: &[String],
) -> Vec<u8> {
    let elapsed = started.elapsed().as_secs_f64();
    let report = compose_report(result_set, categories, elapsed, fallback_args);
    render_report(&report).unwrap_or_default()
}

/// Compose the report structure (pure) for rendering or inspection.
///
/// Iterates `categories` in order; a category with no findings emits no
/// suite. Test and failure counters are incremented only as cases are
/// constructed, so root counts always equal the suite sums.
pub fn compose_report(
    result_set: &RuleResultSet,
    categories: &[RuleCategory],
    elapsed_secs: f64,
    fallback_args: &[String],
) -> TestSuites {
    let mut suites: Vec<TestSuite> = Vec::new();
    let mut global_tests = 0usize;
    let mut global_failures = 0usize;

    for cat in categories {
        let results = result_set.results_by_category(&cat.id);
        if results.is_empty() {
            continue;
        }

        let mut failures = 0usize;
        let mut cases: Vec<TestCase> = Vec::with_capacity(results.len());
        for r in &results {
            let line = r.start_line.unwrap_or(1);
            let file = resolve_file(r, fallback_args);
            let failing = r.rule.severity.is_failure();
            // info findings get no failure element at all; CI ingesters
            // treat any present failure node as a failed test.
            let failure = if failing {
                Some(Failure {
                    message: r.message.clone(),
                    kind: r.rule.severity.as_str().to_uppercase(),
                    body: failure_body(
                        &file,
                        line,
                        &r.path,
                        &r.rule.id,
                        r.rule.severity,
                        &r.message,
                    ),
                })
            } else {
                None
            };
            cases.push(TestCase {
                name: case_name(&r.rule.id, &r.path),
                class_name: format!("oas-linter.{}", r.rule.id),
                failure,
                properties: Some(Properties {
                    properties: vec![
                        Property::new("rule", &r.rule.id),
                        Property::new("severity", r.rule.severity.as_str()),
                        Property::new("line", &line.to_string()),
                        Property::new("file", &file),
                        Property::new("json_path", &r.path),
                    ],
                }),
            });
            if failing {
                failures += 1;
            }
        }

        global_tests += cases.len();
        global_failures += failures;
        suites.push(TestSuite {
            name: format!("OAS Linting - {}", cat.name),
            tests: cases.len(),
            failures,
            time: elapsed_secs,
            cases,
        });
    }

    TestSuites {
        tests: global_tests,
        failures: global_failures,
        time: elapsed_secs,
        suites,
    }
}

/// Serialize a composed report: XML declaration plus a two-space-indented
/// `testsuites` document.
pub fn render_report(report: &TestSuites) -> Result<Vec<u8>, ReportError> {
    let mut body = String::new();
    let mut ser = Serializer::with_root(&mut body, Some("testsuites"))?;
    ser.indent(' ', 2);
    report.serialize(ser)?;

    let mut out = String::with_capacity(XML_HEADER.len() + body.len());
    out.push_str(XML_HEADER);
    out.push_str(&body);
    Ok(out.into_bytes())
}

/// Resolve the file a finding is reported against: the finding's own origin
/// when non-empty, else the caller-supplied fallback, else empty.
fn resolve_file(r: &RuleResult, fallback_args: &[String]) -> String {
    match r.origin.as_deref() {
        Some(origin) if !origin.is_empty() => origin.to_string(),
        _ => fallback_args.first().cloned().unwrap_or_default(),
    }
}

/// Case name from rule id and JSON path, capped at 200 characters.
fn case_name(rule_id: &str, path: &str) -> String {
    let name = format!("Rule: {} - JSON Path: {}", rule_id, path);
    if name.chars().count() > MAX_CASE_NAME {
        let mut truncated: String = name.chars().take(MAX_CASE_NAME).collect();
        truncated.push_str("...");
        truncated
    } else {
        name
    }
}

/// Human-readable failure body: location fields one per line, then a blank
/// line and the finding message.
fn failure_body(
    file: &str,
    line: usize,
    path: &str,
    rule_id: &str,
    severity: Severity,
    message: &str,
) -> String {
    format!(
        "File: {}\nLine: {}\nJSON Path: {}\nRule: {}\nSeverity: {}\n\n{}",
        file, line, path, rule_id, severity, message
    )
}
