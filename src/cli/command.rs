//! Command infrastructure.

use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Errors
    ///
    /// Fatal conditions are returned for the entry point to report; the
    /// command itself never prints them.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}
