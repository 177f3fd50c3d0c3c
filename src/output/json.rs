//! JSON output formatter

use super::OutputFormatter;
use crate::diagnostic::{AttrTarget, Diagnostic, Severity};
use crate::engine::CheckRun;
use crate::node::Node;
use serde::Serialize;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter {
    /// Pretty print with indentation
    pub pretty: bool,

    /// Include the repaired elements
    pub include_nodes: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Include the repaired elements in the output
    pub fn with_nodes(mut self) -> Self {
        self.include_nodes = true;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_default()
        } else {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes: Option<&'a [Node]>,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    severity: Severity,
    message: &'a str,
    element: &'a str,
    target: &'a AttrTarget,
    line: usize,
    column: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    error_count: usize,
    warning_count: usize,
    info_count: usize,
    skipped: usize,
    versions: u32,
    profiles: Vec<&'static str>,
    accessibility: Vec<&'static str>,
    duration_ms: u128,
}

fn json_diagnostic(d: &Diagnostic) -> JsonDiagnostic<'_> {
    JsonDiagnostic {
        code: d.kind.code(),
        severity: d.severity,
        message: &d.message,
        element: &d.element,
        target: &d.target,
        line: d.line,
        column: d.column,
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, run: &CheckRun) -> String {
        let output = JsonOutput {
            file: run.file.as_ref().map(|f| f.display().to_string()),
            diagnostics: run.report.diagnostics.iter().map(json_diagnostic).collect(),
            summary: JsonSummary {
                error_count: run.report.error_count,
                warning_count: run.report.warning_count,
                info_count: run.report.info_count,
                skipped: run.skipped,
                versions: run.summary.versions.bits(),
                profiles: run.summary.versions.profiles(),
                accessibility: run.summary.access.names(),
                duration_ms: run.duration.as_millis(),
            },
            nodes: self.include_nodes.then_some(run.nodes.as_slice()),
        };

        self.render(&output)
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        self.render(&json_diagnostic(diagnostic))
    }
}
