//! Human-readable output formatter.
//!
//! Formats diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::diagnostic::count;
use crate::lint::{LintDiagnostic, Severity};
use console::Style;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn style(&self, severity: Severity) -> Style {
        if !self.use_color {
            return Style::new().force_styling(false);
        }
        let style = Style::new().bold().force_styling(true);
        match severity {
            Severity::Hint => style.cyan(),
            Severity::Warning => style.yellow(),
            Severity::Error => style.red(),
        }
    }

    fn dim(&self) -> Style {
        if self.use_color {
            Style::new().dim().force_styling(true)
        } else {
            Style::new().force_styling(false)
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let dim = self.dim();

        for diag in diagnostics {
            // error[code]: message
            writeln!(
                writer,
                "{}: {}",
                self.style(diag.severity)
                    .apply_to(format!("{}[{}]", diag.severity, diag.code)),
                diag.message
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  {} {}:{}:{}",
                    dim.apply_to("-->"),
                    span.file.display(),
                    span.line,
                    span.column
                )?;
            }

            if let Some(ref field) = diag.field {
                writeln!(writer, "   {} field: {}", dim.apply_to("="), field)?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   {} help: {}", dim.apply_to("="), suggestion)?;
            }

            writeln!(writer)?;
        }

        let error_count = count(diagnostics, Severity::Error);
        let warning_count = count(diagnostics, Severity::Warning);

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Span;

    fn render(formatter: &HumanFormatter, diagnostics: &[LintDiagnostic]) -> String {
        let mut output = Vec::new();
        formatter.format(diagnostics, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_error_diagnostic() {
        let formatter = HumanFormatter::new(false);
        let diagnostics = vec![LintDiagnostic::new(
            "invalid-threshold",
            Severity::Error,
            "Test error message",
        )
        .with_span(Span::new(".commitlintrc.yml", 10, 3))];

        let output = render(&formatter, &diagnostics);

        assert!(output.contains("error[invalid-threshold]: Test error message"));
        assert!(output.contains("--> .commitlintrc.yml:10:3"));
    }

    #[test]
    fn formats_warning_diagnostic() {
        let formatter = HumanFormatter::new(false);
        let diagnostics = vec![LintDiagnostic::new(
            "ignored-option",
            Severity::Warning,
            "Test warning message",
        )];

        let output = render(&formatter, &diagnostics);

        assert!(output.contains("warning[ignored-option]"));
    }

    #[test]
    fn formats_field_and_help() {
        let formatter = HumanFormatter::new(false);
        let diagnostics = vec![LintDiagnostic::new("unknown-rule-name", Severity::Error, "m")
            .with_field("rules.type-enmu")
            .with_suggestion("Did you mean 'type-enum'?")];

        let output = render(&formatter, &diagnostics);

        assert!(output.contains("= field: rules.type-enmu"));
        assert!(output.contains("= help: Did you mean 'type-enum'?"));
    }

    #[test]
    fn formats_summary_line() {
        let formatter = HumanFormatter::new(false);
        let diagnostics = vec![
            LintDiagnostic::new("r1", Severity::Error, "err"),
            LintDiagnostic::new("r2", Severity::Warning, "warn"),
            LintDiagnostic::new("r3", Severity::Warning, "warn2"),
        ];

        let output = render(&formatter, &diagnostics);

        assert!(output.contains("Found 1 error(s) and 2 warning(s)"));
    }

    #[test]
    fn no_summary_when_clean() {
        let formatter = HumanFormatter::new(false);
        assert!(render(&formatter, &[]).is_empty());
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let formatter = HumanFormatter::new(false);
        let diagnostics = vec![LintDiagnostic::new("r1", Severity::Error, "err")];

        assert!(!render(&formatter, &diagnostics).contains('\u{1b}'));
    }

    #[test]
    fn colored_output_has_escape_codes() {
        let formatter = HumanFormatter::new(true);
        let diagnostics = vec![LintDiagnostic::new("r1", Severity::Error, "err")];

        assert!(render(&formatter, &diagnostics).contains('\u{1b}'));
    }
}
