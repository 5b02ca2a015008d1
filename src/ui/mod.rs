//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use chk_plugins::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("All required plugins found: pyqtgraph, PyQt5");
//! assert_eq!(ui.messages().len(), 1);
//! assert!(ui.errors().is_empty());
//! ```

pub mod mock;
pub mod non_interactive;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CheckTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display an informational message on stdout.
    fn message(&mut self, msg: &str);

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str);
}
