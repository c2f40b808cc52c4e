//! Configuration schema definitions for Herald.
//!
//! This module contains the struct definitions that map to the commit-lint
//! configuration file format (`.commitlintrc.yml` and friends).
//!
//! Keys the validator does not inspect (`formatter`, `ignores`, `helpUrl`,
//! unknown parser options, ...) are kept in `extra` maps so that a
//! configuration can be passed through to the engine unchanged.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Root configuration structure for `.commitlintrc.*`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintConfiguration {
    /// Presets to inherit base rules from, in order
    #[serde(
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extends: Vec<String>,

    /// Header parser overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_preset: Option<ParserPreset>,

    /// Rule name to rule specification
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleSpec>,

    /// Engine settings the validator does not inspect
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl LintConfiguration {
    /// The configured header pattern, if any.
    pub fn header_pattern(&self) -> Option<&str> {
        self.parser_preset
            .as_ref()
            .and_then(|p| p.parser_opts.header_pattern.as_deref())
    }

    /// The configured capture-group names, if any.
    pub fn header_correspondence(&self) -> Option<&[String]> {
        self.parser_preset
            .as_ref()
            .and_then(|p| p.parser_opts.header_correspondence.as_deref())
    }
}

/// `parserPreset` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserPreset {
    /// Options handed to the header parser
    pub parser_opts: ParserOpts,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// `parserPreset.parserOpts` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserOpts {
    /// Regular expression the header is matched against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_pattern: Option<String>,

    /// Field name for each capture group, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_correspondence: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Rule severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleLevel {
    /// `0`: the rule is off.
    Disabled,
    /// `1`: violations are reported as warnings.
    Warning,
    /// `2`: violations fail the commit.
    Error,
}

impl RuleLevel {
    /// The numeric value used in configuration files.
    pub fn as_i64(&self) -> i64 {
        match self {
            RuleLevel::Disabled => 0,
            RuleLevel::Warning => 1,
            RuleLevel::Error => 2,
        }
    }
}

impl TryFrom<i64> for RuleLevel {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, i64> {
        match value {
            0 => Ok(RuleLevel::Disabled),
            1 => Ok(RuleLevel::Warning),
            2 => Ok(RuleLevel::Error),
            other => Err(other),
        }
    }
}

impl RuleLevel {
    /// Read a severity as written in the file.
    ///
    /// Only the integers 0, 1 and 2 are levels; floats such as `2.0`,
    /// strings and out-of-range numbers are not.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        value.as_i64().and_then(|n| Self::try_from(n).ok())
    }
}

impl fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleLevel::Disabled => write!(f, "off"),
            RuleLevel::Warning => write!(f, "warning"),
            RuleLevel::Error => write!(f, "error"),
        }
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Always => write!(f, "always"),
            Applicability::Never => write!(f, "never"),
        }
    }
}

/// Rule-specific option value.
///
/// Variant order matters for untagged deserialization: integers must be
/// tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    List(Vec<String>),
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl RuleValue {
    /// Short name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RuleValue::List(_) => "list",
            RuleValue::Flag(_) => "boolean",
            RuleValue::Integer(_) => "integer",
            RuleValue::Number(_) => "number",
            RuleValue::Text(_) => "string",
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::List(items) => write!(f, "[{}]", items.join(", ")),
            RuleValue::Flag(b) => write!(f, "{}", b),
            RuleValue::Integer(n) => write!(f, "{}", n),
            RuleValue::Number(n) => write!(f, "{:?}", n),
            RuleValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// A rule specification: `[severity, applicability?, value?]`.
///
/// The severity is kept as written, whatever its type, so that invalid
/// levels (`3`, `1.5`, `'2'`) survive parsing and can be reported by the
/// validator.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    pub severity: serde_json::Value,
    pub applicability: Option<Applicability>,
    pub value: Option<RuleValue>,
}

impl RuleSpec {
    /// Create a rule with an option value.
    pub fn new(level: RuleLevel, applicability: Applicability, value: RuleValue) -> Self {
        Self {
            severity: level.as_i64().into(),
            applicability: Some(applicability),
            value: Some(value),
        }
    }

    /// Create a rule that takes no option.
    pub fn bare(level: RuleLevel, applicability: Applicability) -> Self {
        Self {
            severity: level.as_i64().into(),
            applicability: Some(applicability),
            value: None,
        }
    }

    /// Create a disabled rule: `[0]`.
    pub fn disabled() -> Self {
        Self {
            severity: 0.into(),
            applicability: None,
            value: None,
        }
    }

    /// The typed level, or `None` when the severity is out of range.
    pub fn level(&self) -> Option<RuleLevel> {
        RuleLevel::from_value(&self.severity)
    }

    /// Whether the rule is switched on (severity 1 or 2).
    pub fn is_enabled(&self) -> bool {
        matches!(self.level(), Some(RuleLevel::Warning | RuleLevel::Error))
    }
}

impl Serialize for RuleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match (&self.applicability, &self.value) {
            (_, Some(_)) => 3,
            (Some(_), None) => 2,
            (None, None) => 1,
        };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        if len > 1 {
            seq.serialize_element(&self.applicability)?;
        }
        if let Some(value) = &self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RuleSpecVisitor)
    }
}

struct RuleSpecVisitor;

impl<'de> Visitor<'de> for RuleSpecVisitor {
    type Value = RuleSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rule array [severity, applicability, value] with 1 to 3 elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleSpec, A::Error> {
        let severity: serde_json::Value = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let applicability: Option<Applicability> =
            seq.next_element::<Option<Applicability>>()?.flatten();
        let value: Option<RuleValue> = seq.next_element()?;

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }

        Ok(RuleSpec {
            severity,
            applicability,
            value,
        })
    }
}

/// Accept either a single string or a list of strings.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rule_triple() {
        let spec: RuleSpec = serde_yaml::from_str("[2, always, 150]").unwrap();
        assert_eq!(spec.severity, 2);
        assert_eq!(spec.applicability, Some(Applicability::Always));
        assert_eq!(spec.value, Some(RuleValue::Integer(150)));
        assert_eq!(spec.level(), Some(RuleLevel::Error));
    }

    #[test]
    fn parses_rule_pair_and_single() {
        let pair: RuleSpec = serde_yaml::from_str("[2, never]").unwrap();
        assert_eq!(pair, RuleSpec::bare(RuleLevel::Error, Applicability::Never));

        let single: RuleSpec = serde_yaml::from_str("[0]").unwrap();
        assert_eq!(single, RuleSpec::disabled());
        assert!(!single.is_enabled());
    }

    #[test]
    fn keeps_out_of_range_severity() {
        let spec: RuleSpec = serde_yaml::from_str("[3, always]").unwrap();
        assert_eq!(spec.severity, 3);
        assert_eq!(spec.level(), None);
        assert!(!spec.is_enabled());
    }

    #[test]
    fn keeps_severity_of_any_type() {
        for (yaml, expected) in [
            ("[1.5, never]", serde_json::json!(1.5)),
            ("['2', never]", serde_json::json!("2")),
            ("[~, never]", serde_json::Value::Null),
        ] {
            let spec: RuleSpec = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(spec.severity, expected, "parsing {}", yaml);
            assert_eq!(spec.level(), None);
        }
    }

    #[test]
    fn integral_float_severity_is_not_a_level() {
        assert_eq!(RuleLevel::from_value(&serde_json::json!(2.0)), None);
        assert_eq!(
            RuleLevel::from_value(&serde_json::json!(2)),
            Some(RuleLevel::Error)
        );
    }

    #[test]
    fn rejects_empty_rule_array() {
        let result: Result<RuleSpec, _> = serde_yaml::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_rule_array_with_four_elements() {
        let result: Result<RuleSpec, _> = serde_yaml::from_str("[2, always, 10, extra]");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_applicability() {
        let result: Result<RuleSpec, _> = serde_yaml::from_str("[2, sometimes]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("sometimes"));
    }

    #[test]
    fn value_shapes_are_distinguished() {
        let cases = [
            ("[feat, fix]", RuleValue::List(vec!["feat".into(), "fix".into()])),
            ("true", RuleValue::Flag(true)),
            ("-5", RuleValue::Integer(-5)),
            ("1.5", RuleValue::Number(1.5)),
            ("'.'", RuleValue::Text(".".into())),
        ];
        for (yaml, expected) in cases {
            let value: RuleValue = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(value, expected, "parsing {}", yaml);
        }
    }

    #[test]
    fn serializes_rule_spec_as_array() {
        let spec = RuleSpec::new(
            RuleLevel::Error,
            Applicability::Always,
            RuleValue::Integer(150),
        );
        assert_eq!(serde_json::to_string(&spec).unwrap(), r#"[2,"always",150]"#);

        let bare = RuleSpec::bare(RuleLevel::Warning, Applicability::Never);
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#"[1,"never"]"#);

        assert_eq!(serde_json::to_string(&RuleSpec::disabled()).unwrap(), "[0]");
    }

    #[test]
    fn extends_accepts_single_string() {
        let config: LintConfiguration =
            serde_yaml::from_str("extends: '@commitlint/config-conventional'").unwrap();
        assert_eq!(config.extends, vec!["@commitlint/config-conventional"]);
    }

    #[test]
    fn parses_parser_preset_in_camel_case() {
        let yaml = r#"
parserPreset:
  parserOpts:
    headerPattern: '^(\w+): (.+)$'
    headerCorrespondence: [type, subject]
"#;
        let config: LintConfiguration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.header_pattern(), Some(r"^(\w+): (.+)$"));
        assert_eq!(
            config.header_correspondence(),
            Some(&["type".to_string(), "subject".to_string()][..])
        );
    }

    #[test]
    fn keeps_unknown_keys_for_pass_through() {
        let yaml = r#"
extends: ['@commitlint/config-conventional']
helpUrl: https://example.com/commits
parserPreset:
  parserOpts:
    issuePrefixes: ['PROJ-']
"#;
        let config: LintConfiguration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.extra.get("helpUrl"),
            Some(&serde_json::json!("https://example.com/commits"))
        );
        let opts = &config.parser_preset.as_ref().unwrap().parser_opts;
        assert_eq!(
            opts.extra.get("issuePrefixes"),
            Some(&serde_json::json!(["PROJ-"]))
        );

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["helpUrl"], "https://example.com/commits");
        assert_eq!(json["parserPreset"]["parserOpts"]["issuePrefixes"][0], "PROJ-");
    }

    #[test]
    fn empty_document_is_default() {
        let config: LintConfiguration = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LintConfiguration::default());
        assert!(config.header_pattern().is_none());
    }

    #[test]
    fn rule_level_conversions() {
        assert_eq!(RuleLevel::try_from(1), Ok(RuleLevel::Warning));
        assert_eq!(RuleLevel::try_from(-1), Err(-1));
        assert_eq!(RuleLevel::Error.as_i64(), 2);
        assert!(RuleLevel::Disabled < RuleLevel::Warning);
    }
}
