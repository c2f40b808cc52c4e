//! Integration tests for the crate root and cross-module behavior.

use herald::config::{example_config, parse_config, ConfigFormat, LintConfiguration, LoadedConfig};
use herald::lint::{check, HumanFormatter, LintFormatter, Severity};
use herald::rules::RuleCatalog;
use herald::{HeraldError, Result};
use std::path::PathBuf;

fn loaded(source: &str) -> LoadedConfig {
    let path = PathBuf::from(".commitlintrc.yml");
    let config = parse_config(source, ConfigFormat::Yaml, &path).unwrap();
    LoadedConfig {
        path,
        source: source.to_string(),
        config,
    }
}

#[test]
fn result_alias_carries_herald_error() {
    fn fails() -> Result<()> {
        Err(HeraldError::ConfigNotFound {
            path: PathBuf::from(".commitlintrc.yml"),
        })
    }
    assert!(fails().is_err());
}

#[test]
fn example_config_is_the_conventional_config() {
    let parsed = parse_config(
        example_config(),
        ConfigFormat::Yaml,
        &PathBuf::from(".commitlintrc.yml"),
    )
    .unwrap();
    assert_eq!(parsed, LintConfiguration::conventional());
}

#[test]
fn check_renders_located_diagnostics() {
    let source = "extends: ['@commitlint/config-conventional']\nrules:\n  type-enum: [2, always, [feat, Fix]]\n";
    let diagnostics = check(&loaded(source), &RuleCatalog::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);

    let mut output = Vec::new();
    HumanFormatter::new(false)
        .format(&diagnostics, &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("error[invalid-enum-value]"));
    assert!(output.contains(".commitlintrc.yml:3:3"));
    assert!(output.contains("help: Use 'fix'"));
}
