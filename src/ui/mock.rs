//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every message
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use chk_plugins::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("PyQt bindings not found");
//!
//! assert!(ui.has_error("PyQt bindings"));
//! assert!(ui.messages().is_empty());
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with nothing captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
