//! Known rule names and the option kind each one takes.
//!
//! The [`RuleCatalog`] stores every rule the engine recognizes and provides
//! methods for registering, looking up, and iterating over them. Plugin
//! rules can be added with [`RuleCatalog::register`] before validating.

use std::collections::BTreeMap;

/// The shape of the option value a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// No option: `[2, 'never']`.
    Bare,
    /// A list of allowed values: `[2, 'always', ['feat', 'fix']]`.
    EnumList,
    /// A case name or list of case names: `[2, 'always', 'lower-case']`.
    Case,
    /// A positive integer length: `[2, 'always', 72]`.
    Length,
    /// A literal string: `[2, 'never', '.']`.
    Text,
}

impl RuleKind {
    /// Short description of the expected option, used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            RuleKind::Bare => "no option",
            RuleKind::EnumList => "a list of strings",
            RuleKind::Case => "a case name or a list of case names",
            RuleKind::Length => "a positive integer",
            RuleKind::Text => "a string",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Bare => write!(f, "bare"),
            RuleKind::EnumList => write!(f, "enum"),
            RuleKind::Case => write!(f, "case"),
            RuleKind::Length => write!(f, "length"),
            RuleKind::Text => write!(f, "text"),
        }
    }
}

const BARE_RULES: &[&str] = &[
    "body-empty",
    "body-leading-blank",
    "footer-empty",
    "footer-leading-blank",
    "header-trim",
    "references-empty",
    "scope-empty",
    "subject-empty",
    "subject-exclamation-mark",
    "type-empty",
];

const ENUM_RULES: &[&str] = &["scope-enum", "type-enum"];

const CASE_RULES: &[&str] = &[
    "body-case",
    "header-case",
    "scope-case",
    "subject-case",
    "type-case",
];

const LENGTH_RULES: &[&str] = &[
    "body-max-length",
    "body-max-line-length",
    "body-min-length",
    "footer-max-length",
    "footer-max-line-length",
    "footer-min-length",
    "header-max-length",
    "header-min-length",
    "scope-max-length",
    "scope-min-length",
    "subject-max-length",
    "subject-min-length",
    "type-max-length",
    "type-min-length",
];

const TEXT_RULES: &[&str] = &[
    "body-full-stop",
    "header-full-stop",
    "signed-off-by",
    "subject-full-stop",
    "trailer-exists",
];

/// Catalog of rule names the engine recognizes.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: BTreeMap<String, RuleKind>,
}

impl RuleCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a catalog with all built-in engine rules.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        let groups: [(&[&str], RuleKind); 5] = [
            (BARE_RULES, RuleKind::Bare),
            (ENUM_RULES, RuleKind::EnumList),
            (CASE_RULES, RuleKind::Case),
            (LENGTH_RULES, RuleKind::Length),
            (TEXT_RULES, RuleKind::Text),
        ];
        for (names, kind) in groups {
            for name in names {
                catalog.register(*name, kind);
            }
        }
        catalog
    }

    /// Register a rule, replacing any previous kind for the same name.
    pub fn register(&mut self, name: impl Into<String>, kind: RuleKind) {
        self.rules.insert(name.into(), kind);
    }

    /// Look up the option kind of a rule.
    pub fn get(&self, name: &str) -> Option<RuleKind> {
        self.rules.get(name).copied()
    }

    /// Iterate over all rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleKind)> {
        self.rules.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Closest known rule name, if within Damerau-Levenshtein distance 3.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        self.rules
            .keys()
            .map(|known| (known.as_str(), strsim::damerau_levenshtein(name, known)))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(known, _)| known)
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}
