//! Init command implementation.
//!
//! The `herald init` command writes the conventional configuration to
//! `.commitlintrc.yml` in the project root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{example_config, find_config_file, DEFAULT_FILE_NAME};
use crate::error::{HeraldError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path the configuration is written to.
    fn target(&self) -> PathBuf {
        self.project_root.join(DEFAULT_FILE_NAME)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();

        if let Some(existing) = find_config_file(&self.project_root) {
            if !self.args.force {
                return Err(HeraldError::AlreadyExists { path: existing });
            }
            if existing != target {
                ui.warning(&format!(
                    "{} will be shadowed by {}",
                    existing.display(),
                    DEFAULT_FILE_NAME
                ));
            }
        }

        fs::write(&target, example_config())?;
        tracing::info!("Wrote {}", target.display());

        ui.success(&format!("Created {}", target.display()));
        ui.detail("Validate it any time with 'herald validate'");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_validated, LintConfiguration};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn init_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = InitCommand::new(temp.path(), InitArgs::default());

        assert_eq!(cmd.project_root(), temp.path());
        assert_eq!(cmd.target(), temp.path().join(".commitlintrc.yml"));
    }

    #[test]
    fn writes_valid_reference_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = InitCommand::new(temp.path(), InitArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("Created"));
        let validated = load_validated(temp.path(), None).unwrap();
        assert_eq!(validated.into_inner(), LintConfiguration::conventional());
    }

    #[test]
    fn refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".commitlintrc.yml");
        fs::write(&path, "extends: [mine]\n").unwrap();

        let result = InitCommand::new(temp.path(), InitArgs::default()).execute(&mut MockUI::new());

        assert!(matches!(result, Err(HeraldError::AlreadyExists { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "extends: [mine]\n");
    }

    #[test]
    fn force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".commitlintrc.yml");
        fs::write(&path, "extends: [mine]\n").unwrap();

        let result = InitCommand::new(temp.path(), InitArgs { force: true })
            .execute(&mut MockUI::new())
            .unwrap();

        assert!(result.success);
        assert_eq!(fs::read_to_string(&path).unwrap(), example_config());
    }

    #[test]
    fn force_warns_about_shadowed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".commitlintrc.json"), "{}").unwrap();
        let mut ui = MockUI::new();

        InitCommand::new(temp.path(), InitArgs { force: true })
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_warning("shadowed"));
    }
}
