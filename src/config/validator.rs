//! Configuration validation rules.
//!
//! This module validates a [`LintConfiguration`] before it is handed to the
//! linting engine:
//! - `extends` entries must not be blank
//! - `headerPattern` must compile and have one capture group per
//!   `headerCorrespondence` entry
//! - every rule name must be known to the [`RuleCatalog`]
//! - severities must be 0, 1 or 2
//! - each enabled rule's option must match the shape its kind expects
//!
//! Validation is a pure pass. A valid configuration comes back unchanged
//! inside [`ValidatedConfig`].

use std::collections::HashSet;
use std::ops::Deref;

use fancy_regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::schema::{LintConfiguration, RuleLevel, RuleSpec, RuleValue};
use crate::rules::{CaseName, RuleCatalog, RuleKind};

/// Dotted path of the header pattern, used when reporting pattern errors.
pub const HEADER_PATTERN_FIELD: &str = "parserPreset.parserOpts.headerPattern";

/// A single validation failure.
///
/// Every variant is fatal: a configuration with any of these problems must
/// not reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The header pattern does not compile or disagrees with its field names.
    #[error("Malformed header pattern: {reason}")]
    MalformedPattern { reason: String },

    /// A rule name the engine does not recognize.
    #[error("Unknown rule '{rule}'")]
    UnknownRuleName { rule: String },

    /// Severity other than the integers 0, 1 or 2, shown as written.
    #[error("Rule '{rule}' has invalid severity {severity}; expected 0, 1 or 2")]
    InvalidSeverity { rule: String, severity: String },

    /// A length option that is missing, non-positive, or not an integer.
    #[error("Rule '{rule}' has invalid threshold {value}; expected a positive integer")]
    InvalidThreshold { rule: String, value: String },

    /// An enum option list that repeats an entry.
    #[error("Rule '{rule}' lists '{value}' more than once")]
    DuplicateEnumValue { rule: String, value: String },

    /// An enum option entry that is empty or wrongly cased.
    #[error("Rule '{rule}' has invalid entry '{value}': {reason}")]
    InvalidEnumValue {
        rule: String,
        value: String,
        reason: String,
    },

    /// An enabled rule without `always` or `never`.
    #[error("Rule '{rule}' is enabled but does not say 'always' or 'never'")]
    InvalidApplicability { rule: String },

    /// An option of the wrong shape for the rule.
    #[error("Rule '{rule}' expects {expected}, found {found}")]
    InvalidOption {
        rule: String,
        expected: String,
        found: String,
    },

    /// A blank preset identifier.
    #[error("Preset at extends[{index}] is blank")]
    InvalidPreset { index: usize },
}

impl ConfigError {
    /// Stable kebab-case identifier, used as the diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MalformedPattern { .. } => "malformed-pattern",
            ConfigError::UnknownRuleName { .. } => "unknown-rule-name",
            ConfigError::InvalidSeverity { .. } => "invalid-severity",
            ConfigError::InvalidThreshold { .. } => "invalid-threshold",
            ConfigError::DuplicateEnumValue { .. } => "duplicate-enum-value",
            ConfigError::InvalidEnumValue { .. } => "invalid-enum-value",
            ConfigError::InvalidApplicability { .. } => "invalid-applicability",
            ConfigError::InvalidOption { .. } => "invalid-option",
            ConfigError::InvalidPreset { .. } => "invalid-preset",
        }
    }

    /// The rule this error refers to, if it is rule-specific.
    pub fn rule(&self) -> Option<&str> {
        match self {
            ConfigError::UnknownRuleName { rule }
            | ConfigError::InvalidSeverity { rule, .. }
            | ConfigError::InvalidThreshold { rule, .. }
            | ConfigError::DuplicateEnumValue { rule, .. }
            | ConfigError::InvalidEnumValue { rule, .. }
            | ConfigError::InvalidApplicability { rule }
            | ConfigError::InvalidOption { rule, .. } => Some(rule.as_str()),
            ConfigError::MalformedPattern { .. } | ConfigError::InvalidPreset { .. } => None,
        }
    }

    /// Dotted path of the offending field.
    pub fn field(&self) -> String {
        match self {
            ConfigError::MalformedPattern { .. } => HEADER_PATTERN_FIELD.to_string(),
            ConfigError::InvalidPreset { index } => format!("extends[{}]", index),
            other => format!("rules.{}", other.rule().unwrap_or_default()),
        }
    }
}

/// A configuration that passed validation.
///
/// Holds the original value untouched; dereferences to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig(LintConfiguration);

impl ValidatedConfig {
    /// Borrow the validated configuration.
    pub fn config(&self) -> &LintConfiguration {
        &self.0
    }

    /// Return the configuration, unchanged.
    pub fn into_inner(self) -> LintConfiguration {
        self.0
    }
}

impl Deref for ValidatedConfig {
    type Target = LintConfiguration;

    fn deref(&self) -> &LintConfiguration {
        &self.0
    }
}

/// Validate against the built-in rule catalog.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found, in the order of
/// [`collect_errors`].
pub fn validate(config: LintConfiguration) -> Result<ValidatedConfig, ConfigError> {
    validate_with(config, &RuleCatalog::with_builtins())
}

/// Validate against a caller-supplied rule catalog.
pub fn validate_with(
    config: LintConfiguration,
    catalog: &RuleCatalog,
) -> Result<ValidatedConfig, ConfigError> {
    match collect_errors_with(&config, catalog).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(ValidatedConfig(config)),
    }
}

/// Validate and keep every error, in [`collect_errors`] order.
///
/// # Errors
///
/// Returns the non-empty list of errors for an invalid configuration.
pub fn validate_all(
    config: LintConfiguration,
    catalog: &RuleCatalog,
) -> Result<ValidatedConfig, Vec<ConfigError>> {
    let errors = collect_errors_with(&config, catalog);
    if errors.is_empty() {
        Ok(ValidatedConfig(config))
    } else {
        Err(errors)
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
/// Order: presets, header pattern, then rules by name.
pub fn collect_errors(config: &LintConfiguration) -> Vec<ConfigError> {
    collect_errors_with(config, &RuleCatalog::with_builtins())
}

/// [`collect_errors`] with a caller-supplied rule catalog.
pub fn collect_errors_with(config: &LintConfiguration, catalog: &RuleCatalog) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    errors.extend(validate_presets(config));
    errors.extend(validate_header_pattern(config));
    for (name, spec) in &config.rules {
        errors.extend(validate_rule(name, spec, catalog));
    }

    tracing::debug!(
        "Validated {} rule(s), found {} error(s)",
        config.rules.len(),
        errors.len()
    );
    errors
}

/// Number of capture groups in a pattern, excluding the implicit whole match.
///
/// The engine runs header patterns as JavaScript regexes, so lookaround and
/// backreferences must compile here too.
///
/// # Errors
///
/// Returns the compiler's message when the pattern is not a valid regex.
pub fn capture_group_count(pattern: &str) -> Result<usize, String> {
    Regex::new(pattern)
        .map(|re| re.captures_len() - 1)
        .map_err(|e| e.to_string())
}

fn validate_presets(config: &LintConfiguration) -> Vec<ConfigError> {
    config
        .extends
        .iter()
        .enumerate()
        .filter(|(_, preset)| preset.trim().is_empty())
        .map(|(index, _)| ConfigError::InvalidPreset { index })
        .collect()
}

fn validate_header_pattern(config: &LintConfiguration) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let correspondence = config.header_correspondence();

    if let Some(fields) = correspondence {
        let mut seen = HashSet::new();
        for field in fields {
            if field.trim().is_empty() {
                errors.push(ConfigError::MalformedPattern {
                    reason: "headerCorrespondence contains an empty field name".to_string(),
                });
            } else if !seen.insert(field.as_str()) {
                errors.push(ConfigError::MalformedPattern {
                    reason: format!("headerCorrespondence names '{}' more than once", field),
                });
            }
        }
    }

    // Without a pattern the preset's own pattern applies; nothing to count.
    let Some(pattern) = config.header_pattern() else {
        return errors;
    };

    match capture_group_count(pattern) {
        Err(message) => errors.push(ConfigError::MalformedPattern {
            reason: format!("does not compile: {}", message),
        }),
        Ok(groups) => {
            if let Some(fields) = correspondence {
                if fields.len() != groups {
                    errors.push(ConfigError::MalformedPattern {
                        reason: format!(
                            "pattern has {} capture group(s) but headerCorrespondence names {}",
                            groups,
                            fields.len()
                        ),
                    });
                }
            }
        }
    }

    errors
}

fn validate_rule(name: &str, spec: &RuleSpec, catalog: &RuleCatalog) -> Vec<ConfigError> {
    let Some(kind) = catalog.get(name) else {
        return vec![ConfigError::UnknownRuleName {
            rule: name.to_string(),
        }];
    };

    let Some(level) = spec.level() else {
        return vec![ConfigError::InvalidSeverity {
            rule: name.to_string(),
            severity: spec.severity.to_string(),
        }];
    };

    if level == RuleLevel::Disabled {
        return Vec::new();
    }

    let mut errors = Vec::new();
    if spec.applicability.is_none() {
        errors.push(ConfigError::InvalidApplicability {
            rule: name.to_string(),
        });
    }
    errors.extend(validate_option(name, kind, spec.value.as_ref()));
    errors
}

fn validate_option(name: &str, kind: RuleKind, value: Option<&RuleValue>) -> Vec<ConfigError> {
    let wrong_shape = |found: String| {
        vec![ConfigError::InvalidOption {
            rule: name.to_string(),
            expected: kind.expected().to_string(),
            found,
        }]
    };

    match (kind, value) {
        (RuleKind::Bare, _) => Vec::new(),

        (RuleKind::EnumList, Some(RuleValue::List(items))) => validate_enum_entries(name, items),
        (RuleKind::EnumList, other) => wrong_shape(describe(other)),

        (RuleKind::Case, Some(RuleValue::Text(case))) => validate_case_names(name, [case]),
        (RuleKind::Case, Some(RuleValue::List(cases))) => {
            let mut errors = validate_case_names(name, cases);
            errors.extend(duplicates(name, cases));
            errors
        }
        (RuleKind::Case, other) => wrong_shape(describe(other)),

        (RuleKind::Length, Some(RuleValue::Integer(n))) if *n > 0 => Vec::new(),
        (RuleKind::Length, other) => vec![ConfigError::InvalidThreshold {
            rule: name.to_string(),
            value: match other {
                Some(v) => v.to_string(),
                None => "(missing)".to_string(),
            },
        }],

        (RuleKind::Text, Some(RuleValue::Text(_))) => Vec::new(),
        (RuleKind::Text, other) => wrong_shape(describe(other)),
    }
}

fn describe(value: Option<&RuleValue>) -> String {
    match value {
        Some(v) => format!("{} {}", v.type_name(), v),
        None => "no option".to_string(),
    }
}

/// Entries of `type-enum` must be lower-case; all enum entries must be
/// non-empty and unique.
fn validate_enum_entries(name: &str, items: &[String]) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let lower_case_only = name == "type-enum";

    for item in items {
        let reason = if item.trim().is_empty() {
            Some("entries must not be empty")
        } else if lower_case_only && *item != item.to_lowercase() {
            Some("entries must be lower-case")
        } else {
            None
        };
        if let Some(reason) = reason {
            errors.push(ConfigError::InvalidEnumValue {
                rule: name.to_string(),
                value: item.clone(),
                reason: reason.to_string(),
            });
        }
    }

    errors.extend(duplicates(name, items));
    errors
}

fn validate_case_names<'a>(
    name: &str,
    cases: impl IntoIterator<Item = &'a String>,
) -> Vec<ConfigError> {
    cases
        .into_iter()
        .filter(|case| case.parse::<CaseName>().is_err())
        .map(|case| ConfigError::InvalidOption {
            rule: name.to_string(),
            expected: RuleKind::Case.expected().to_string(),
            found: format!("unknown case '{}'", case),
        })
        .collect()
}

/// One error per repeated value, reported at its first repetition.
fn duplicates(name: &str, items: &[String]) -> Vec<ConfigError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    items
        .iter()
        .filter(|item| !seen.insert(item.as_str()) && reported.insert(item.as_str()))
        .map(|item| ConfigError::DuplicateEnumValue {
            rule: name.to_string(),
            value: item.clone(),
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::schema::{Applicability, ParserOpts, ParserPreset};
    use proptest::prelude::*;

    fn config_with_groups(groups: usize, fields: usize) -> LintConfiguration {
        LintConfiguration {
            parser_preset: Some(ParserPreset {
                parser_opts: ParserOpts {
                    header_pattern: Some(format!("^{}$", r"(\w+)".repeat(groups))),
                    header_correspondence: Some((0..fields).map(|i| format!("f{}", i)).collect()),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    proptest! {
        #[test]
        fn group_count_mismatch_is_malformed(groups in 0usize..8, fields in 0usize..8) {
            prop_assume!(groups != fields);
            let result = validate(config_with_groups(groups, fields));
            let is_malformed = matches!(result, Err(ConfigError::MalformedPattern { .. }));
            prop_assert!(is_malformed);
        }

        #[test]
        fn matching_group_count_validates(groups in 0usize..8) {
            prop_assert!(validate(config_with_groups(groups, groups)).is_ok());
        }

        #[test]
        fn out_of_range_severity_is_rejected(
            severity in any::<i64>().prop_filter("outside 0..=2", |s| !(0..=2).contains(s))
        ) {
            let mut config = LintConfiguration::conventional();
            config.rules.get_mut("type-empty").unwrap().severity = severity.into();
            let is_invalid = matches!(
                validate(config),
                Err(ConfigError::InvalidSeverity { severity: s, .. }) if s == severity.to_string()
            );
            prop_assert!(is_invalid);
        }

        #[test]
        fn duplicated_type_is_rejected(
            types in prop::collection::hash_set("[a-z]{1,8}", 1..8),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut items: Vec<String> = types.into_iter().collect();
            let repeated = pick.get(&items).clone();
            items.push(repeated.clone());

            let mut config = LintConfiguration::conventional();
            config.rules.insert(
                "type-enum".to_string(),
                RuleSpec::new(RuleLevel::Error, Applicability::Always, RuleValue::List(items)),
            );
            prop_assert_eq!(
                validate(config),
                Err(ConfigError::DuplicateEnumValue {
                    rule: "type-enum".to_string(),
                    value: repeated,
                })
            );
        }

        #[test]
        fn positive_thresholds_pass_through(header in 1i64..10_000, body in 1i64..10_000) {
            let mut config = LintConfiguration::conventional();
            config.rules.get_mut("header-max-length").unwrap().value = Some(RuleValue::Integer(header));
            config.rules.get_mut("body-max-line-length").unwrap().value = Some(RuleValue::Integer(body));
            let validated = validate(config.clone());
            prop_assert_eq!(validated.map(ValidatedConfig::into_inner), Ok(config));
        }
    }
}
