//! Turning validation results into diagnostics.
//!
//! [`check`] is the full pass used by the CLI: it collects every
//! [`ConfigError`], adds non-fatal advisories, and attaches a source
//! location to each diagnostic when the offending key can be found in the
//! file.

use crate::config::{collect_errors_with, ConfigError, LintConfiguration, LoadedConfig, RuleLevel};
use crate::lint::{LintDiagnostic, Severity, Span};
use crate::rules::{CaseName, RuleCatalog, RuleKind};

/// Validate a loaded file and return every diagnostic, errors first.
pub fn check(loaded: &LoadedConfig, catalog: &RuleCatalog) -> Vec<LintDiagnostic> {
    let errors = collect_errors_with(&loaded.config, catalog);
    let mut diagnostics = diagnostics_for(&errors, catalog);
    diagnostics.extend(advisories(&loaded.config, catalog));

    for diagnostic in &mut diagnostics {
        if let Some(span) = locate(diagnostic.field.as_deref(), loaded) {
            diagnostic.span = Some(span);
        }
    }

    tracing::debug!(
        "{} diagnostic(s) for {}",
        diagnostics.len(),
        loaded.path.display()
    );
    diagnostics
}

/// Convert validation errors into error diagnostics, keeping their order.
pub fn diagnostics_for(errors: &[ConfigError], catalog: &RuleCatalog) -> Vec<LintDiagnostic> {
    errors
        .iter()
        .map(|error| {
            let diagnostic = LintDiagnostic::new(error.code(), Severity::Error, error.to_string())
                .with_field(error.field());
            match suggestion_for(error, catalog) {
                Some(help) => diagnostic.with_suggestion(help),
                None => diagnostic,
            }
        })
        .collect()
}

/// Non-fatal findings that never block validation.
///
/// - `ignored-option`: an enabled rule that takes no option was given one
/// - `disabled-rule-option`: a disabled rule still carries an option
/// - `no-rules`: nothing is extended and no rule is enabled
pub fn advisories(config: &LintConfiguration, catalog: &RuleCatalog) -> Vec<LintDiagnostic> {
    let mut diagnostics = Vec::new();

    for (name, spec) in &config.rules {
        let (Some(level), Some(value)) = (spec.level(), spec.value.as_ref()) else {
            continue;
        };

        if level == RuleLevel::Disabled {
            diagnostics.push(
                LintDiagnostic::new(
                    "disabled-rule-option",
                    Severity::Warning,
                    format!("Rule '{}' is disabled but still sets {}", name, value),
                )
                .with_field(format!("rules.{}", name))
                .with_suggestion(format!("Use [0] to disable '{}'", name)),
            );
        } else if catalog.get(name) == Some(RuleKind::Bare) {
            diagnostics.push(
                LintDiagnostic::new(
                    "ignored-option",
                    Severity::Warning,
                    format!("Rule '{}' takes no option; {} is ignored", name, value),
                )
                .with_field(format!("rules.{}", name))
                .with_suggestion(format!(
                    "Use [{}, '{}']",
                    spec.severity,
                    spec.applicability.map(|a| a.to_string()).unwrap_or_default()
                )),
            );
        }
    }

    if config.extends.is_empty() && !config.rules.values().any(|spec| spec.is_enabled()) {
        diagnostics.push(
            LintDiagnostic::new(
                "no-rules",
                Severity::Hint,
                "Configuration extends no preset and enables no rule; every commit message will pass",
            )
            .with_suggestion("Run 'herald init' for a conventional starting point"),
        );
    }

    diagnostics
}

fn suggestion_for(error: &ConfigError, catalog: &RuleCatalog) -> Option<String> {
    match error {
        ConfigError::UnknownRuleName { rule } => catalog
            .suggest(rule)
            .map(|known| format!("Did you mean '{}'?", known)),
        ConfigError::InvalidSeverity { .. } => {
            Some("Use 0 (off), 1 (warning) or 2 (error)".to_string())
        }
        ConfigError::InvalidThreshold { rule, .. } => {
            Some(format!("Use a positive whole number, e.g. {}: [2, 'always', 72]", rule))
        }
        ConfigError::DuplicateEnumValue { value, .. } => {
            Some(format!("Remove the repeated '{}'", value))
        }
        ConfigError::InvalidEnumValue { value, .. } if !value.trim().is_empty() => {
            Some(format!("Use '{}'", value.to_lowercase()))
        }
        ConfigError::InvalidEnumValue { .. } => Some("Remove the empty entry".to_string()),
        ConfigError::InvalidApplicability { .. } => {
            Some("Add 'always' or 'never' after the severity".to_string())
        }
        ConfigError::InvalidOption { rule, .. } if catalog.get(rule) == Some(RuleKind::Case) => {
            let names: Vec<_> = CaseName::ALL.iter().map(|c| c.as_str()).collect();
            Some(format!("Known cases: {}", names.join(", ")))
        }
        ConfigError::InvalidOption { .. } => None,
        ConfigError::MalformedPattern { .. } => Some(
            "Name one headerCorrespondence field per capture group; use (?:...) for groups that capture nothing"
                .to_string(),
        ),
        ConfigError::InvalidPreset { .. } => {
            Some("Remove the blank entry from extends".to_string())
        }
    }
}

/// Find the line of the last segment of a dotted field path.
fn locate(field: Option<&str>, loaded: &LoadedConfig) -> Option<Span> {
    let last = field?.rsplit('.').next()?;
    let key = last.split('[').next()?;
    Span::locate(&loaded.path, &loaded.source, key)
}
