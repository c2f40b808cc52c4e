//! Validate command implementation.
//!
//! The `herald validate` command checks the configuration file and reports
//! every problem it finds, not just the first.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::load_config;
use crate::error::{HeraldError, Result};
use crate::lint::{
    check, HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat, Severity,
};
use crate::rules::RuleCatalog;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_INVALID, EXIT_NOT_FOUND};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Format diagnostics using the requested formatter.
    fn format_output(&self, diagnostics: &[LintDiagnostic], use_color: bool) -> Result<String> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output)?,
            OutputFormat::Human => HumanFormatter::new(use_color).format(diagnostics, &mut output)?,
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(loaded) => loaded,
            Err(HeraldError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No configuration found at {}. Run 'herald init' first.",
                    path.display()
                ));
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

        ui.detail(&format!(
            "Checking {} ({} rule(s))",
            loaded.path.display(),
            loaded.config.rules.len()
        ));

        let diagnostics = check(&loaded, &RuleCatalog::with_builtins());

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);
        let should_fail = has_errors || (self.args.strict && has_warnings);

        if self.args.format == OutputFormat::Json || !diagnostics.is_empty() {
            let rendered = self.format_output(&diagnostics, ui.use_color())?;
            ui.output(&rendered);
        }

        if self.args.format == OutputFormat::Json {
            return Ok(if should_fail {
                CommandResult::failure(EXIT_INVALID)
            } else {
                CommandResult::success()
            });
        }

        if has_errors {
            ui.error(&format!("{} is invalid", loaded.path.display()));
            Ok(CommandResult::failure(EXIT_INVALID))
        } else if should_fail {
            ui.error("Warnings are treated as errors (--strict)");
            Ok(CommandResult::failure(EXIT_INVALID))
        } else {
            ui.success(&format!("{} is valid", loaded.path.display()));
            Ok(CommandResult::success())
        }
    }
}
