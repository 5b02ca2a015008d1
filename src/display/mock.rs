//! Fixed-answer availability backend for testing.
//!
//! `MockAvailability` returns a preconfigured result and plugin list and
//! counts how often it was asked.
//!
//! # Example
//!
//! ```
//! use chk_plugins::display::{MockAvailability, PluginAvailability};
//!
//! let backend = MockAvailability::unavailable(&["PyQt5"], "PyQt bindings not found");
//! let result = backend.plugins_available(true);
//! assert!(!result.success);
//! assert_eq!(result.report, "PyQt bindings not found");
//! assert_eq!(backend.availability_calls(), 1);
//! ```

use std::cell::Cell;

use super::{AvailabilityResult, PluginAvailability};

/// Availability backend with a fixed answer.
#[derive(Debug, Default)]
pub struct MockAvailability {
    success: bool,
    report: String,
    plugins: Vec<String>,
    availability_calls: Cell<usize>,
    report_requests: Cell<usize>,
}

impl MockAvailability {
    /// A backend where every plugin is present.
    pub fn available(plugins: &[&str]) -> Self {
        Self {
            success: true,
            plugins: plugins.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    /// A backend that fails with `report`.
    pub fn unavailable(plugins: &[&str], report: &str) -> Self {
        Self {
            success: false,
            report: report.to_string(),
            plugins: plugins.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Number of `plugins_available` calls so far.
    pub fn availability_calls(&self) -> usize {
        self.availability_calls.get()
    }

    /// Number of those calls that asked for a report.
    pub fn report_requests(&self) -> usize {
        self.report_requests.get()
    }
}

impl PluginAvailability for MockAvailability {
    fn plugins_available(&self, return_report: bool) -> AvailabilityResult {
        self.availability_calls.set(self.availability_calls.get() + 1);
        if return_report {
            self.report_requests.set(self.report_requests.get() + 1);
        }

        AvailabilityResult {
            success: self.success,
            report: if return_report {
                self.report.clone()
            } else {
                String::new()
            },
        }
    }

    fn required_plugins(&self) -> Vec<String> {
        self.plugins.clone()
    }
}
