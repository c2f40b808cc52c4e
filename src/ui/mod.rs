//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use herald::ui::{OutputMode, TerminalUI, UserInterface};
//!
//! let mut ui = TerminalUI::new(OutputMode::Quiet, true);
//! ui.success("Configuration is valid");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, HeraldTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Whether rendered output may contain ANSI colors.
    fn use_color(&self) -> bool;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a detail line, shown only in verbose mode.
    fn detail(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write requested output (reports, configuration, completions) verbatim.
    ///
    /// Unlike status messages this is never suppressed by `--quiet`.
    fn output(&mut self, text: &str);
}
