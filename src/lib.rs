//! chk_plugins - health check for display backend plugins.
//!
//! The reduction pipeline's visualization layer depends on a handful of
//! Python display plugins. This crate checks that they can be imported and
//! reports either the missing pieces or a single confirmation line.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the check command
//! - [`config`] - Interpreter and plugin list configuration
//! - [`display`] - Plugin availability collaborators
//! - [`error`] - Error types and result aliases
//! - [`health`] - The health check itself
//! - [`platform`] - Environment detection
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use chk_plugins::display::MockAvailability;
//! use chk_plugins::health::PluginHealthCheck;
//!
//! let check = PluginHealthCheck::new(MockAvailability::available(&["pyqtgraph", "PyQt5"]));
//! assert_eq!(
//!     check.run().unwrap(),
//!     "All required plugins found: pyqtgraph, PyQt5"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod health;
pub mod platform;
pub mod ui;

pub use error::{CheckError, Result};
