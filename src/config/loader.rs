//! Configuration file discovery and loading.

use crate::config::schema::DisplayConfig;
use crate::error::{CheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CHK_PLUGINS_CONFIG";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "chk_plugins.yml";

/// Where the config comes from.
///
/// Discovery order, first match wins:
/// 1. Path named by `CHK_PLUGINS_CONFIG`
/// 2. `chk_plugins.yml` in the working directory
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit path from the environment. It must exist.
    Explicit(PathBuf),
    /// File found in the working directory.
    Discovered(PathBuf),
    /// No file; use [`DisplayConfig::default`].
    Defaults,
}

impl ConfigSource {
    /// Resolve the config source for a working directory.
    ///
    /// `env_override` is the value of [`CONFIG_ENV_VAR`], passed in so tests
    /// don't have to touch the process environment.
    pub fn discover(working_dir: &Path, env_override: Option<PathBuf>) -> Self {
        if let Some(path) = env_override.filter(|p| !p.as_os_str().is_empty()) {
            return Self::Explicit(path);
        }

        let path = working_dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::Discovered(path)
        } else {
            Self::Defaults
        }
    }

    /// The file this source reads, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Discovered(path) => Some(path),
            Self::Defaults => None,
        }
    }
}

/// Load a config file and parse it into [`DisplayConfig`].
///
/// # Errors
///
/// Returns `Io` if the file can't be read.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if the parsed config is unusable.
pub fn load_config_file(path: &Path) -> Result<DisplayConfig> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, path)?;
    config.validate()?;
    Ok(config)
}

/// Parse YAML content into [`DisplayConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DisplayConfig> {
    if content.trim().is_empty() {
        return Ok(DisplayConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config for a resolved source.
pub fn load_config(source: &ConfigSource) -> Result<DisplayConfig> {
    match source.path() {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(DisplayConfig::default())
        }
    }
}

/// Discover and load the config for the current process.
pub fn load_from_env(working_dir: &Path) -> Result<DisplayConfig> {
    let env_override = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    load_config(&ConfigSource::discover(working_dir, env_override))
}
