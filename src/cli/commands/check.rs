//! Check command implementation.
//!
//! The `fitform check` command runs the required-field validation only.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::form::FormValidator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let values = self.args.fields.to_values();

        if FormValidator::new().validate(&values, ui) {
            ui.success("All required fields are filled in");
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
