//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! problems found in a configuration file, with optional source location
//! tracking for precise error reporting.

use super::span::Span;

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint, does not affect validity.
    Hint,
    /// Advisory that only fails `--strict` runs.
    Warning,
    /// Validation error; the configuration must not be used.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message about a configuration file.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Kebab-case code of the check that produced this diagnostic.
    pub code: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Dotted path of the offending field, e.g. `rules.type-enum`.
    pub field: Option<String>,
    /// Optional source location.
    pub span: Option<Span>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(code: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity,
            message: message.into(),
            field: None,
            span: None,
            suggestion: None,
        }
    }

    /// Name the offending field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Count diagnostics of the given severity.
pub fn count(diagnostics: &[LintDiagnostic], severity: Severity) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == severity)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new("unknown-rule-name", Severity::Error, "Test message");

        assert_eq!(diag.code, "unknown-rule-name");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test message");
        assert!(diag.field.is_none());
        assert!(diag.suggestion.is_none());
        assert!(diag.span.is_none());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = LintDiagnostic::new("invalid-threshold", Severity::Error, "Test message")
            .with_field("rules.header-max-length")
            .with_span(Span::new(".commitlintrc.yml", 10, 3))
            .with_suggestion("Fix it like this");

        assert_eq!(diag.field.as_deref(), Some("rules.header-max-length"));
        assert!(diag.span.is_some());
        assert_eq!(diag.suggestion.as_deref(), Some("Fix it like this"));
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Hint < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Hint), "hint");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn count_by_severity() {
        let diagnostics = vec![
            LintDiagnostic::new("a", Severity::Error, "e"),
            LintDiagnostic::new("b", Severity::Warning, "w"),
            LintDiagnostic::new("c", Severity::Error, "e2"),
        ];
        assert_eq!(count(&diagnostics, Severity::Error), 2);
        assert_eq!(count(&diagnostics, Severity::Warning), 1);
        assert_eq!(count(&diagnostics, Severity::Hint), 0);
    }
}
