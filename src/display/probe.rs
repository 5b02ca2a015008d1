//! Python import probe for display plugins.
//!
//! The display backend's plugins are Python packages. A plugin counts as
//! available when the configured interpreter can import its module. Each
//! plugin is probed in its own short-lived interpreter process, in the
//! configured order, so one broken import can't mask another.
//!
//! # Example
//!
//! ```no_run
//! use chk_plugins::config::DisplayConfig;
//! use chk_plugins::display::{InterpreterProbe, PluginAvailability};
//!
//! let probe = InterpreterProbe::from_config(&DisplayConfig::default());
//! let result = probe.plugins_available(true);
//! if !result.success {
//!     eprintln!("{}", result.report);
//! }
//! ```

use std::process::{Command, Stdio};

use crate::config::{DisplayConfig, PluginSpec};

use super::{AvailabilityResult, PluginAvailability};

/// Imports the module named by the first argument. Passing the module as an
/// argument keeps config values out of the evaluated source.
const IMPORT_SCRIPT: &str = "import importlib, sys; importlib.import_module(sys.argv[1])";

/// Probes plugin availability by importing each plugin with Python.
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    python: String,
    plugins: Vec<PluginSpec>,
}

/// Result of importing a single plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ImportOutcome {
    Imported,
    Failed { detail: String },
}

/// A plugin that failed to import, with the reason to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MissingPlugin {
    name: String,
    detail: String,
}

impl InterpreterProbe {
    /// Create a probe for the given interpreter and plugins.
    pub fn new(python: impl Into<String>, plugins: Vec<PluginSpec>) -> Self {
        Self {
            python: python.into(),
            plugins,
        }
    }

    /// Create a probe from a loaded config.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.python.clone(), config.required_plugins.clone())
    }

    /// The interpreter this probe runs.
    pub fn python(&self) -> &str {
        &self.python
    }

    fn try_import(&self, plugin: &PluginSpec) -> std::io::Result<ImportOutcome> {
        let module = plugin.module();
        tracing::debug!("Probing plugin '{}' via import of '{}'", plugin.name, module);

        let output = Command::new(&self.python)
            .arg("-c")
            .arg(IMPORT_SCRIPT)
            .arg(module)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if output.status.success() {
            return Ok(ImportOutcome::Imported);
        }

        let detail = last_line(&output.stderr)
            .unwrap_or_else(|| format!("import of '{}' failed", module));
        Ok(ImportOutcome::Failed { detail })
    }
}

impl PluginAvailability for InterpreterProbe {
    fn plugins_available(&self, return_report: bool) -> AvailabilityResult {
        let mut missing = Vec::new();

        for plugin in &self.plugins {
            match self.try_import(plugin) {
                Ok(ImportOutcome::Imported) => {
                    tracing::debug!("Plugin '{}' is available", plugin.name);
                }
                Ok(ImportOutcome::Failed { detail }) => {
                    tracing::info!("Plugin '{}' is not available: {}", plugin.name, detail);
                    missing.push(MissingPlugin {
                        name: plugin.name.clone(),
                        detail,
                    });
                }
                Err(e) => {
                    // Nothing else can be probed without an interpreter.
                    tracing::info!("Could not start '{}': {}", self.python, e);
                    return AvailabilityResult {
                        success: false,
                        report: if return_report {
                            format!("Could not run Python interpreter '{}': {}", self.python, e)
                        } else {
                            String::new()
                        },
                    };
                }
            }
        }

        if missing.is_empty() {
            return AvailabilityResult::available();
        }

        AvailabilityResult {
            success: false,
            report: if return_report {
                format_missing_report(&missing)
            } else {
                String::new()
            },
        }
    }

    fn required_plugins(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name.clone()).collect()
    }
}

fn format_missing_report(missing: &[MissingPlugin]) -> String {
    let names: Vec<&str> = missing.iter().map(|m| m.name.as_str()).collect();
    let mut report = format!("Missing required plugins: {}", names.join(", "));
    for plugin in missing {
        report.push_str(&format!("\n  {}: {}", plugin.name, plugin.detail));
    }
    report
}

/// Last non-empty line of a child's stderr, which for a failed Python
/// import is the exception line.
fn last_line(stderr: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .map(str::to_string)
}
