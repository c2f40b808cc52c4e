//! Herald - validation for commit-message linter configuration.
//!
//! Herald checks a commit-lint configuration before it reaches the linting
//! engine: the header pattern must compile and agree with its field names,
//! every rule must be one the engine knows, and every rule's severity and
//! option must make sense. A valid configuration is returned unchanged.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration schema, loading, and validation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Diagnostics, formatters, and JSON Schema output
//! - [`rules`] - The catalog of rules the engine recognizes
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use herald::config::{validate, ConfigError, LintConfiguration, RuleValue};
//!
//! let mut config = LintConfiguration::conventional();
//! config.rules.get_mut("header-max-length").unwrap().value = Some(RuleValue::Integer(-5));
//!
//! let err = validate(config).unwrap_err();
//! assert!(matches!(err, ConfigError::InvalidThreshold { .. }));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod rules;
pub mod ui;

pub use error::{HeraldError, Result};
