//! Default configuration values.
//!
//! The reference configuration extends the conventional preset and accepts
//! an optional bracketed ticket number before the type:
//! `[1234] feat(parser): support scopes`.

use super::schema::{
    Applicability, LintConfiguration, ParserOpts, ParserPreset, RuleLevel, RuleSpec, RuleValue,
};

/// Preset the reference configuration inherits from.
pub const CONVENTIONAL_PRESET: &str = "@commitlint/config-conventional";

/// Header pattern with an optional `[number]` prefix.
pub const DEFAULT_HEADER_PATTERN: &str =
    r"^(?:\[(\d+)\] )?([\w]+)(?:\(([\w\$\.\-\*\s]*)\))?\: (.+)$";

/// Field names for the capture groups of [`DEFAULT_HEADER_PATTERN`].
pub const DEFAULT_HEADER_CORRESPONDENCE: [&str; 4] = ["number", "type", "scope", "subject"];

/// Commit types accepted by `type-enum`.
pub const DEFAULT_TYPES: [&str; 11] = [
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// File name written by `herald init`.
pub const DEFAULT_FILE_NAME: &str = ".commitlintrc.yml";

impl LintConfiguration {
    /// The reference configuration.
    pub fn conventional() -> Self {
        let always = Applicability::Always;
        let never = Applicability::Never;
        let error = RuleLevel::Error;

        let rules = [
            ("type-enum", RuleSpec::new(error, always, list(&DEFAULT_TYPES))),
            (
                "subject-case",
                RuleSpec::new(
                    error,
                    never,
                    list(&["sentence-case", "start-case", "pascal-case", "upper-case"]),
                ),
            ),
            ("subject-empty", RuleSpec::bare(error, never)),
            (
                "subject-full-stop",
                RuleSpec::new(error, never, RuleValue::Text(".".to_string())),
            ),
            (
                "type-case",
                RuleSpec::new(error, always, RuleValue::Text("lower-case".to_string())),
            ),
            ("type-empty", RuleSpec::bare(error, never)),
            (
                "header-max-length",
                RuleSpec::new(error, always, RuleValue::Integer(150)),
            ),
            (
                "body-max-line-length",
                RuleSpec::new(error, always, RuleValue::Integer(200)),
            ),
        ]
        .into_iter()
        .map(|(name, spec)| (name.to_string(), spec))
        .collect();

        Self {
            extends: vec![CONVENTIONAL_PRESET.to_string()],
            parser_preset: Some(ParserPreset {
                parser_opts: ParserOpts {
                    header_pattern: Some(DEFAULT_HEADER_PATTERN.to_string()),
                    header_correspondence: Some(
                        DEFAULT_HEADER_CORRESPONDENCE
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    ),
                    ..Default::default()
                },
                ..Default::default()
            }),
            rules,
            ..Default::default()
        }
    }
}

fn list(items: &[&str]) -> RuleValue {
    RuleValue::List(items.iter().map(|s| s.to_string()).collect())
}

/// The reference configuration as a commented YAML file.
pub fn example_config() -> &'static str {
    r#"# Commit message lint configuration
# Validate with `herald validate`.

extends:
  - '@commitlint/config-conventional'

parserPreset:
  parserOpts:
    # "[1234] feat(scope): subject", ticket number optional
    headerPattern: '^(?:\[(\d+)\] )?([\w]+)(?:\(([\w\$\.\-\*\s]*)\))?\: (.+)$'
    headerCorrespondence: [number, type, scope, subject]

# [severity (0 off, 1 warn, 2 error), always|never, option]
rules:
  type-enum:
    - 2
    - always
    - - feat      # user-facing feature
      - fix       # bug fix
      - docs      # documentation only
      - style     # formatting, no behaviour change
      - refactor  # restructuring, no behaviour change
      - perf      # speed or memory
      - test      # tests only
      - build     # build system or dependencies
      - ci        # pipeline configuration
      - chore     # maintenance outside src and tests
      - revert    # reverts an earlier commit
  subject-case: [2, never, [sentence-case, start-case, pascal-case, upper-case]]
  subject-empty: [2, never]
  subject-full-stop: [2, never, '.']
  type-case: [2, always, lower-case]
  type-empty: [2, never]
  header-max-length: [2, always, 150]
  body-max-line-length: [2, always, 200]
"#
}
