//! Configuration file discovery and loading.
//!
//! The linting engine finds its configuration by convention in the project
//! root. This module applies the same convention so Herald validates the
//! file the engine will actually read.

use crate::config::schema::LintConfiguration;
use crate::config::validator::{validate, ValidatedConfig};
use crate::error::{HeraldError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized configuration file names, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".commitlintrc.yml",
    ".commitlintrc.yaml",
    ".commitlintrc.json",
    ".commitlintrc",
];

/// Manifest whose `commitlint` key may hold the configuration.
pub const PACKAGE_JSON: &str = "package.json";

/// Key of the configuration inside [`PACKAGE_JSON`].
pub const PACKAGE_JSON_KEY: &str = "commitlint";

/// Script configuration file names. These are found but never evaluated.
pub const SCRIPT_CONFIG_NAMES: [&str; 8] = [
    ".commitlintrc.js",
    ".commitlintrc.cjs",
    ".commitlintrc.mjs",
    ".commitlintrc.ts",
    "commitlint.config.js",
    "commitlint.config.cjs",
    "commitlint.config.mjs",
    "commitlint.config.ts",
];

/// Syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    /// JSON manifest with the configuration under [`PACKAGE_JSON_KEY`].
    PackageJson,
    /// JavaScript or TypeScript module.
    Script,
}

impl ConfigFormat {
    /// Pick the format from the file name and extension.
    ///
    /// Extension-less files (`.commitlintrc`) are read as YAML, which also
    /// accepts JSON documents.
    pub fn from_path(path: &Path) -> Self {
        if path.file_name().and_then(|n| n.to_str()) == Some(PACKAGE_JSON) {
            return ConfigFormat::PackageJson;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("js" | "cjs" | "mjs" | "ts") => ConfigFormat::Script,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// A configuration file read from disk.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Where the configuration came from.
    pub path: PathBuf,
    /// Raw file contents, kept for locating diagnostics.
    pub source: String,
    /// Parsed configuration.
    pub config: LintConfiguration,
}

/// Find the first recognized configuration file directly inside `dir`.
///
/// Order: `.commitlintrc` files, then a `package.json` that has a
/// `commitlint` key, then script configurations.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let rc_file = CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file());
    if rc_file.is_some() {
        return rc_file;
    }

    let manifest = dir.join(PACKAGE_JSON);
    if manifest.is_file() && has_package_config(&manifest) {
        return Some(manifest);
    }

    SCRIPT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Whether a `package.json` carries a `commitlint` key.
fn has_package_config(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(manifest) => manifest.get(PACKAGE_JSON_KEY).is_some(),
        Err(e) => {
            tracing::debug!("Skipping unreadable {}: {}", path.display(), e);
            false
        }
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. A recognized configuration file (primary indicator)
/// 2. `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if find_config_file(&current).is_some() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse configuration content.
///
/// # Arguments
///
/// * `content` - The file content to parse
/// * `format` - Syntax of the content
/// * `source_path` - Path for error reporting
///
/// # Errors
///
/// Returns `ScriptConfig` for [`ConfigFormat::Script`], whose content is
/// never evaluated.
pub fn parse_config(
    content: &str,
    format: ConfigFormat,
    source_path: &Path,
) -> Result<LintConfiguration> {
    let parsed = match format {
        ConfigFormat::Script => {
            return Err(HeraldError::ScriptConfig {
                path: source_path.to_path_buf(),
            })
        }
        ConfigFormat::PackageJson => parse_package_config(content),
        _ if content.trim().is_empty() => return Ok(LintConfiguration::default()),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| HeraldError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })
}

/// Deserialize the `commitlint` key of a `package.json`.
fn parse_package_config(content: &str) -> std::result::Result<LintConfiguration, String> {
    let mut manifest: serde_json::Value =
        serde_json::from_str(content).map_err(|e| e.to_string())?;

    match manifest.get_mut(PACKAGE_JSON_KEY).map(serde_json::Value::take) {
        Some(section) => serde_json::from_value(section).map_err(|e| e.to_string()),
        None => Err(format!("no \"{}\" key", PACKAGE_JSON_KEY)),
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the content is invalid.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig> {
    let source = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HeraldError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HeraldError::Io(e)
        }
    })?;

    let config = parse_config(&source, ConfigFormat::from_path(path), path)?;
    tracing::info!(
        "Loaded {} rule(s) from {}",
        config.rules.len(),
        path.display()
    );

    Ok(LoadedConfig {
        path: path.to_path_buf(),
        source,
        config,
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads that file. Otherwise, loads the
/// first recognized file in `project_root`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no configuration file exists.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LoadedConfig> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => find_config_file(project_root).ok_or_else(|| HeraldError::ConfigNotFound {
            path: project_root.join(CONFIG_FILE_NAMES[0]),
        })?,
    };
    tracing::debug!("Using configuration file {}", path.display());

    load_config_file(&path)
}

/// Load a configuration and validate it.
///
/// # Errors
///
/// Returns `Invalid` with the first validation error, in addition to the
/// errors of [`load_config`].
pub fn load_validated(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<ValidatedConfig> {
    let loaded = load_config(project_root, config_override)?;
    Ok(validate(loaded.config)?)
}
