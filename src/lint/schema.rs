//! JSON Schema generation for commit-lint configuration files.
//!
//! This module generates a JSON Schema (Draft-07) for the configuration
//! file format, enabling editor autocomplete. Rule entries are generated
//! from the [`RuleCatalog`], so plugin rules registered there appear too.

use serde_json::{json, Map, Value};

use crate::rules::{CaseName, RuleCatalog, RuleKind};

/// Generates JSON Schema for `.commitlintrc` files.
pub struct SchemaGenerator<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> SchemaGenerator<'a> {
    /// Create a new schema generator over a rule catalog.
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Generate the complete JSON Schema.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Commit-lint Configuration",
            "description": "Configuration for the commit-message linting engine",
            "type": "object",
            "definitions": self.definitions(),
            "properties": {
                "extends": {
                    "description": "Preset identifiers, resolved by the engine",
                    "oneOf": [
                        { "type": "string", "minLength": 1 },
                        { "type": "array", "items": { "type": "string", "minLength": 1 } }
                    ]
                },
                "parserPreset": self.parser_preset_schema(),
                "rules": self.rules_schema()
            }
        })
    }

    fn definitions(&self) -> Value {
        let cases: Vec<_> = CaseName::ALL.iter().map(|c| c.as_str()).collect();
        json!({
            "severity": {
                "type": "integer",
                "enum": [0, 1, 2],
                "description": "0 disables the rule, 1 warns, 2 errors"
            },
            "applicability": {
                "type": "string",
                "enum": ["always", "never"]
            },
            "case": {
                "type": "string",
                "enum": cases
            }
        })
    }

    fn parser_preset_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "parserOpts": {
                    "type": "object",
                    "properties": {
                        "headerPattern": {
                            "type": "string",
                            "format": "regex",
                            "description": "Regex splitting the header into named parts"
                        },
                        "headerCorrespondence": {
                            "type": "array",
                            "items": { "type": "string", "minLength": 1 },
                            "uniqueItems": true,
                            "description": "One field name per capture group of headerPattern"
                        }
                    }
                }
            }
        })
    }

    fn rules_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .catalog
            .iter()
            .map(|(name, kind)| (name.to_string(), rule_schema(kind)))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "additionalProperties": false
        })
    }
}

/// `[severity, applicability?, option?]` for a rule kind.
fn rule_schema(kind: RuleKind) -> Value {
    let option = match kind {
        RuleKind::Bare => json!({}),
        RuleKind::EnumList => json!({
            "type": "array",
            "items": { "type": "string", "minLength": 1 },
            "uniqueItems": true
        }),
        RuleKind::Case => json!({
            "oneOf": [
                { "$ref": "#/definitions/case" },
                {
                    "type": "array",
                    "items": { "$ref": "#/definitions/case" },
                    "uniqueItems": true
                }
            ]
        }),
        RuleKind::Length => json!({ "type": "integer", "minimum": 1 }),
        RuleKind::Text => json!({ "type": "string" }),
    };

    json!({
        "type": "array",
        "description": format!("[severity, applicability, {}]", kind.expected()),
        "minItems": 1,
        "maxItems": 3,
        "items": [
            { "$ref": "#/definitions/severity" },
            { "$ref": "#/definitions/applicability" },
            option
        ]
    })
}
