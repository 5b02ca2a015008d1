//! Display backend plugin availability.
//!
//! The health check never inspects the environment itself. It asks a
//! [`PluginAvailability`] collaborator two things: whether the required
//! plugins are usable, and which plugins those are.
//!
//! - [`probe`] - [`InterpreterProbe`], which imports each plugin with Python
//! - [`mock`] - [`MockAvailability`], a fixed answer for tests
//!
//! # Example
//!
//! ```
//! use chk_plugins::display::{MockAvailability, PluginAvailability};
//!
//! let backend = MockAvailability::available(&["pyqtgraph", "PyQt5"]);
//! let result = backend.plugins_available(true);
//! assert!(result.success);
//! assert_eq!(backend.required_plugins(), vec!["pyqtgraph", "PyQt5"]);
//! ```

pub mod mock;
pub mod probe;

pub use mock::MockAvailability;
pub use probe::InterpreterProbe;

/// Outcome of one availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResult {
    /// Whether every required plugin is installed and usable.
    pub success: bool,
    /// Human-readable diagnostic. Only meaningful when `success` is false.
    pub report: String,
}

impl AvailabilityResult {
    /// All required plugins were found.
    pub fn available() -> Self {
        Self {
            success: true,
            report: String::new(),
        }
    }

    /// At least one required plugin is unusable.
    pub fn unavailable(report: impl Into<String>) -> Self {
        Self {
            success: false,
            report: report.into(),
        }
    }
}

/// Queries the display backend for its plugins.
///
/// Implementations must be idempotent: asking twice against an unchanged
/// environment gives the same answer.
pub trait PluginAvailability {
    /// Check whether all required plugins are usable.
    ///
    /// When `return_report` is false the returned report is empty.
    fn plugins_available(&self, return_report: bool) -> AvailabilityResult;

    /// Names of the plugins the display backend requires, in order.
    fn required_plugins(&self) -> Vec<String>;
}

impl<T: PluginAvailability + ?Sized> PluginAvailability for &T {
    fn plugins_available(&self, return_report: bool) -> AvailabilityResult {
        (**self).plugins_available(return_report)
    }

    fn required_plugins(&self) -> Vec<String> {
        (**self).required_plugins()
    }
}
