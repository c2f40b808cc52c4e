//! Print command implementation.
//!
//! The `herald print` command validates the configuration and writes it
//! back out unchanged, as JSON or YAML. Nothing is printed for an invalid
//! configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::PrintArgs;
use crate::config::{load_config, validate_all};
use crate::error::{HeraldError, Result};
use crate::rules::RuleCatalog;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_INVALID, EXIT_NOT_FOUND};

/// The print command implementation.
pub struct PrintCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: PrintArgs,
}

impl PrintCommand {
    /// Create a new print command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: PrintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for PrintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(loaded) => loaded,
            Err(HeraldError::ConfigNotFound { path }) => {
                ui.error(&format!("No configuration found at {}", path.display()));
                return Ok(CommandResult::failure(EXIT_NOT_FOUND));
            }
            Err(HeraldError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(EXIT_INVALID));
            }
            Err(e @ HeraldError::ScriptConfig { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_INVALID));
            }
            Err(e) => return Err(e),
        };

        let validated = match validate_all(loaded.config, &RuleCatalog::with_builtins()) {
            Ok(validated) => validated,
            Err(errors) => {
                for error in &errors {
                    ui.error(&error.to_string());
                }
                return Ok(CommandResult::failure(EXIT_INVALID));
            }
        };
        let rendered = if self.args.yaml {
            serde_yaml::to_string(&validated).context("failed to render configuration as YAML")?
        } else {
            let mut json = serde_json::to_string_pretty(&validated)
                .context("failed to render configuration as JSON")?;
            json.push('\n');
            json
        };

        ui.output(&rendered);
        Ok(CommandResult::success())
    }
}
