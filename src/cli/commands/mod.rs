//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `herald` with no
//! subcommand is the same as `herald validate`.

pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod print;
pub mod schema;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_INVALID, EXIT_NOT_FOUND};
