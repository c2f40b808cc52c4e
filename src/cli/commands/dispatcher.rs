//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ValidateArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::init::InitCommand;
use super::print::PrintCommand;
use super::schema::SchemaCommand;
use super::validate::ValidateCommand;

/// Exit code for a configuration that failed to parse or validate.
pub const EXIT_INVALID: i32 = 1;

/// Exit code when no configuration file exists.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit configuration file instead of discovery.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the explicit configuration path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `validate` with default args.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!("Dispatching {:?}", cli.command);

        match &cli.command {
            Some(Commands::Validate(args)) => self.validate(args.clone()).execute(ui),
            Some(Commands::Print(args)) => {
                PrintCommand::new(&self.project_root, self.config_path(), args.clone())
                    .execute(ui)
            }
            Some(Commands::Init(args)) => {
                InitCommand::new(&self.project_root, args.clone()).execute(ui)
            }
            Some(Commands::Schema) => SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            None => self.validate(ValidateArgs::default()).execute(ui),
        }
    }

    fn validate(&self, args: ValidateArgs) -> ValidateCommand {
        ValidateCommand::new(&self.project_root, self.config_path(), args)
    }
}
