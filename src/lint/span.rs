//! Source location spans.
//!
//! This module provides types for tracking source locations in
//! configuration files. Locations are found by searching the raw text for
//! the offending key, which works for both YAML and JSON files.

use std::path::PathBuf;

/// A source location in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Line (1-indexed).
    pub line: usize,
    /// Column (1-indexed).
    pub column: usize,
}

impl Span {
    /// Create a span with a precise position.
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Locate the first line where `key` is used as a mapping key.
    pub fn locate(file: impl Into<PathBuf>, source: &str, key: &str) -> Option<Self> {
        find_key(source, key).map(|(line, column)| Self::new(file, line, column))
    }
}

/// Find `key:`, `"key":` or `'key':` in `source`.
///
/// Bare keys must start the (indented) line so that `scope-enum` does not
/// match inside `subscope-enum:`. Quoted keys may appear anywhere, which
/// covers single-line JSON.
fn find_key(source: &str, key: &str) -> Option<(usize, usize)> {
    let quoted = [format!("\"{}\"", key), format!("'{}'", key)];

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with(':') {
                return Some((index + 1, indent + 1));
            }
        }

        for candidate in &quoted {
            for (offset, _) in line.match_indices(candidate.as_str()) {
                let rest = &line[offset + candidate.len()..];
                if rest.trim_start().starts_with(':') {
                    return Some((index + 1, offset + 1));
                }
            }
        }
    }

    None
}
