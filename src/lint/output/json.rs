//! JSON output formatter.
//!
//! Formats diagnostics as machine-readable JSON for editor and CI tooling.

use super::LintFormatter;
use crate::lint::diagnostic::count;
use crate::lint::{LintDiagnostic, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    valid: bool,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'a str,
    severity: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    hints: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let json_diagnostics = diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                code: &d.code,
                severity: d.severity.to_string(),
                message: &d.message,
                field: d.field.as_deref(),
                file: d.span.as_ref().map(|s| s.file.display().to_string()),
                line: d.span.as_ref().map(|s| s.line),
                column: d.span.as_ref().map(|s| s.column),
                suggestion: d.suggestion.as_deref(),
            })
            .collect();

        let errors = count(diagnostics, Severity::Error);
        let output = JsonOutput {
            valid: errors == 0,
            diagnostics: json_diagnostics,
            summary: JsonSummary {
                total: diagnostics.len(),
                errors,
                warnings: count(diagnostics, Severity::Warning),
                hints: count(diagnostics, Severity::Hint),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Span;

    fn render(diagnostics: &[LintDiagnostic]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(diagnostics, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(&[LintDiagnostic::new(
            "invalid-severity",
            Severity::Error,
            "Error message",
        )]);

        assert!(parsed["diagnostics"].is_array());
        assert_eq!(parsed["diagnostics"][0]["code"], "invalid-severity");
        assert_eq!(parsed["diagnostics"][0]["severity"], "error");
        assert_eq!(parsed["summary"]["total"], 1);
        assert_eq!(parsed["valid"], false);
    }

    #[test]
    fn includes_location_and_field_when_present() {
        let parsed = render(&[LintDiagnostic::new("test", Severity::Error, "msg")
            .with_field("rules.type-enum")
            .with_span(Span::new(".commitlintrc.yml", 10, 5))]);

        assert_eq!(parsed["diagnostics"][0]["file"], ".commitlintrc.yml");
        assert_eq!(parsed["diagnostics"][0]["line"], 10);
        assert_eq!(parsed["diagnostics"][0]["column"], 5);
        assert_eq!(parsed["diagnostics"][0]["field"], "rules.type-enum");
    }

    #[test]
    fn omits_location_when_absent() {
        let parsed = render(&[LintDiagnostic::new("test", Severity::Error, "msg")]);

        assert!(parsed["diagnostics"][0]["line"].is_null());
        assert!(parsed["diagnostics"][0].get("file").is_none());
    }

    #[test]
    fn summary_counts_by_severity() {
        let parsed = render(&[
            LintDiagnostic::new("r1", Severity::Error, "e1"),
            LintDiagnostic::new("r2", Severity::Error, "e2"),
            LintDiagnostic::new("r3", Severity::Warning, "w1"),
            LintDiagnostic::new("r4", Severity::Hint, "h1"),
        ]);

        assert_eq!(parsed["summary"]["total"], 4);
        assert_eq!(parsed["summary"]["errors"], 2);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["hints"], 1);
    }

    #[test]
    fn warnings_alone_are_valid() {
        let parsed = render(&[LintDiagnostic::new("w", Severity::Warning, "w1")]);
        assert_eq!(parsed["valid"], true);
    }

    #[test]
    fn empty_report() {
        let parsed = render(&[]);
        assert_eq!(parsed["summary"]["total"], 0);
        assert_eq!(parsed["valid"], true);
    }
}
