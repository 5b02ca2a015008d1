//! Check command implementation.
//!
//! Runs the plugin health check and prints the success line. Failures are
//! returned to the entry point, which prints them and exits non-zero.

use crate::display::PluginAvailability;
use crate::error::Result;
use crate::health::PluginHealthCheck;
use crate::ui::UserInterface;

use super::command::Command;

/// The check command implementation.
pub struct CheckCommand<B> {
    check: PluginHealthCheck<B>,
}

impl<B: PluginAvailability> CheckCommand<B> {
    /// Create a new check command over an availability backend.
    pub fn new(backend: B) -> Self {
        Self {
            check: PluginHealthCheck::new(backend),
        }
    }
}

impl<B: PluginAvailability> Command for CheckCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let message = self.check.run()?;
        ui.message(&message);
        Ok(())
    }
}
