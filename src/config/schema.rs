//! Configuration schema definitions.
//!
//! These structs map to the `chk_plugins.yml` file format. Every field is
//! optional; anything left out falls back to the built-in defaults.

use serde::Deserialize;

use crate::error::{CheckError, Result};

/// Plugins the display backend needs when no config says otherwise.
pub const DEFAULT_REQUIRED_PLUGINS: &[&str] = &["pyqtgraph", "PyQt5"];

/// Root configuration structure for `chk_plugins.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Python interpreter used to import the display plugins.
    pub python: String,

    /// Plugins the display backend depends on, in reporting order.
    pub required_plugins: Vec<PluginSpec>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            required_plugins: DEFAULT_REQUIRED_PLUGINS
                .iter()
                .map(|name| PluginSpec::new(name))
                .collect(),
        }
    }
}

impl DisplayConfig {
    /// Names of the required plugins, in configured order.
    pub fn plugin_names(&self) -> Vec<String> {
        self.required_plugins
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    /// Reject configs the probe cannot act on.
    ///
    /// Duplicate plugin names are allowed and reported as given.
    pub fn validate(&self) -> Result<()> {
        if self.python.trim().is_empty() {
            return Err(CheckError::ConfigValidationError {
                message: "python interpreter must not be empty".to_string(),
            });
        }

        for (index, plugin) in self.required_plugins.iter().enumerate() {
            if plugin.name.trim().is_empty() {
                return Err(CheckError::ConfigValidationError {
                    message: format!("required_plugins[{}]: name must not be empty", index),
                });
            }
            if plugin.module.as_deref().is_some_and(|m| m.trim().is_empty()) {
                return Err(CheckError::ConfigValidationError {
                    message: format!(
                        "required_plugins[{}] ({}): module must not be empty",
                        index, plugin.name
                    ),
                });
            }
        }

        Ok(())
    }
}

/// A single plugin the display backend requires.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginSpec {
    /// Name shown to the user.
    pub name: String,

    /// Importable module probed for this plugin. Defaults to `name`.
    #[serde(default)]
    pub module: Option<String>,
}

impl PluginSpec {
    /// A plugin whose module path is its name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            module: None,
        }
    }

    /// A plugin imported under a different module path.
    pub fn with_module(name: &str, module: &str) -> Self {
        Self {
            name: name.to_string(),
            module: Some(module.to_string()),
        }
    }

    /// The module path to import.
    pub fn module(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(windows)]
fn default_python() -> String {
    "python".to_string()
}

#[cfg(not(windows))]
fn default_python() -> String {
    "python3".to_string()
}
