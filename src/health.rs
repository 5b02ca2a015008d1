//! The plugin health check.
//!
//! [`PluginHealthCheck::run`] asks the availability collaborator once and
//! turns the answer into either the success message or a
//! [`CheckError::PluginsUnavailable`]. It never prints and never exits; the
//! caller decides how to report the outcome.

use crate::display::PluginAvailability;
use crate::error::{CheckError, Result};

/// Prefix of the success message.
pub const SUCCESS_PREFIX: &str = "All required plugins found: ";

/// Shown when a collaborator fails without explaining why.
pub const FALLBACK_REPORT: &str = "Required display plugins are not available";

/// Checks that the display backend's plugins are usable.
pub struct PluginHealthCheck<B> {
    backend: B,
}

impl<B: PluginAvailability> PluginHealthCheck<B> {
    /// Create a health check over an availability backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get the availability backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the check.
    ///
    /// Returns the success message naming every required plugin, or
    /// `PluginsUnavailable` carrying the backend's report.
    pub fn run(&self) -> Result<String> {
        let result = self.backend.plugins_available(true);

        if !result.success {
            tracing::debug!("Availability check failed");
            let report = if result.report.trim().is_empty() {
                FALLBACK_REPORT.to_string()
            } else {
                result.report
            };
            return Err(CheckError::PluginsUnavailable { report });
        }

        let plugins = self.backend.required_plugins();
        tracing::debug!("Availability check passed for {} plugins", plugins.len());
        Ok(success_message(&plugins))
    }
}

/// Format the success message. Order is kept as given.
pub fn success_message(plugins: &[String]) -> String {
    format!("{}{}", SUCCESS_PREFIX, plugins.join(", "))
}
