//! Non-interactive UI for CI/headless environments.

use super::UserInterface;

/// UI implementation for non-interactive mode.
///
/// Writes plain, unstyled lines so the output can be parsed by scripts.
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}
