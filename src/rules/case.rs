//! Case styles accepted by the `*-case` rules.

use std::str::FromStr;

/// A case style the engine can enforce on a header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseName {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl CaseName {
    /// All case styles, in the engine's documentation order.
    pub const ALL: [CaseName; 8] = [
        CaseName::Lower,
        CaseName::Upper,
        CaseName::Camel,
        CaseName::Kebab,
        CaseName::Pascal,
        CaseName::Sentence,
        CaseName::Snake,
        CaseName::Start,
    ];

    /// The identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseName::Lower => "lower-case",
            CaseName::Upper => "upper-case",
            CaseName::Camel => "camel-case",
            CaseName::Kebab => "kebab-case",
            CaseName::Pascal => "pascal-case",
            CaseName::Sentence => "sentence-case",
            CaseName::Snake => "snake-case",
            CaseName::Start => "start-case",
        }
    }
}

impl FromStr for CaseName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| format!("unknown case: {}", s))
    }
}

impl std::fmt::Display for CaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
