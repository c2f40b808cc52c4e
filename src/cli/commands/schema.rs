//! Schema command implementation.
//!
//! The `herald schema` command prints a JSON Schema for editors.

use anyhow::Context;

use crate::error::Result;
use crate::lint::SchemaGenerator;
use crate::rules::RuleCatalog;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand {
    catalog: RuleCatalog,
}

impl SchemaCommand {
    /// Create a schema command over the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new(&self.catalog).generate();
        let mut rendered =
            serde_json::to_string_pretty(&schema).context("failed to render JSON Schema")?;
        rendered.push('\n');

        ui.output(&rendered);
        Ok(CommandResult::success())
    }
}
