//! Error types for Herald operations.
//!
//! This module defines [`HeraldError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation failures are [`ConfigError`]s and are wrapped by
//!   [`HeraldError::Invalid`] when they cross the loader boundary
//! - Use `anyhow::Error` (via `HeraldError::Other`) for unexpected errors
//! - All errors should name the file or field they refer to

use std::path::PathBuf;
use thiserror::Error;

use crate::config::validator::ConfigError;

/// Core error type for Herald operations.
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration is a JavaScript or TypeScript module.
    #[error("{path} is a script configuration and can't be validated; move it to .commitlintrc.yml or the \"commitlint\" key of package.json")]
    ScriptConfig { path: PathBuf },

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),

    /// Refused to overwrite an existing file.
    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Herald operations.
pub type Result<T> = std::result::Result<T, HeraldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = HeraldError::ConfigNotFound {
            path: PathBuf::from("/repo/.commitlintrc.yml"),
        };
        assert!(err.to_string().contains("/repo/.commitlintrc.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = HeraldError::ConfigParseError {
            path: PathBuf::from(".commitlintrc.json"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".commitlintrc.json"));
        assert!(msg.contains("expected value at line 1"));
    }

    #[test]
    fn script_config_explains_refusal() {
        let err = HeraldError::ScriptConfig {
            path: PathBuf::from("commitlint.config.js"),
        };
        let msg = err.to_string();
        assert!(msg.contains("commitlint.config.js"));
        assert!(msg.contains("can't be validated"));
    }

    #[test]
    fn invalid_wraps_config_error() {
        let err: HeraldError = ConfigError::UnknownRuleName {
            rule: "type-enmu".into(),
        }
        .into();
        assert!(matches!(err, HeraldError::Invalid(_)));
        assert!(err.to_string().contains("type-enmu"));
    }

    #[test]
    fn already_exists_displays_path() {
        let err = HeraldError::AlreadyExists {
            path: PathBuf::from(".commitlintrc.yml"),
        };
        assert!(err.to_string().contains(".commitlintrc.yml"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HeraldError = io_err.into();
        assert!(matches!(err, HeraldError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(HeraldError::ConfigNotFound {
                path: PathBuf::from("missing"),
            })
        }
        assert!(returns_error().is_err());
    }
}
