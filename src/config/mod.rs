//! Configuration loading, parsing, and validation for Herald.
//!
//! This module handles all aspects of the commit-lint configuration:
//! - Schema definitions in [`schema`]
//! - The reference configuration in [`defaults`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use herald::config::{validate, LintConfiguration};
//!
//! let config = LintConfiguration::conventional();
//! let validated = validate(config.clone()).unwrap();
//! assert_eq!(validated.into_inner(), config);
//! ```
//!
//! # Configuration File Locations
//!
//! The first of these files found in the project root is used:
//! 1. `.commitlintrc.yml`
//! 2. `.commitlintrc.yaml`
//! 3. `.commitlintrc.json`
//! 4. `.commitlintrc`
//! 5. the `commitlint` key of `package.json`
//!
//! Script configurations (`commitlint.config.js` and friends) are found
//! last but are reported as [`HeraldError::ScriptConfig`] instead of being
//! evaluated.
//!
//! [`HeraldError::ScriptConfig`]: crate::error::HeraldError::ScriptConfig

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    Applicability, LintConfiguration, ParserOpts, ParserPreset, RuleLevel, RuleSpec, RuleValue,
};

// Defaults re-exports
pub use defaults::{
    example_config, CONVENTIONAL_PRESET, DEFAULT_FILE_NAME, DEFAULT_HEADER_CORRESPONDENCE,
    DEFAULT_HEADER_PATTERN, DEFAULT_TYPES,
};

// Loader re-exports
pub use loader::{
    find_config_file, find_project_root, load_config, load_config_file, load_validated,
    parse_config, ConfigFormat, LoadedConfig, CONFIG_FILE_NAMES, PACKAGE_JSON, PACKAGE_JSON_KEY,
    SCRIPT_CONFIG_NAMES,
};

// Validator re-exports
pub use validator::{
    capture_group_count, collect_errors, collect_errors_with, validate, validate_all,
    validate_with,
    ConfigError, ValidatedConfig,
};
