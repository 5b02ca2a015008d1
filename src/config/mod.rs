//! Configuration for the display plugin probe.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use chk_plugins::config::{load_config, ConfigSource};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("chk_plugins.yml"),
//!     "required_plugins:\n  - name: ginga\n",
//! )
//! .unwrap();
//!
//! let source = ConfigSource::discover(temp.path(), None);
//! let config = load_config(&source).unwrap();
//! assert_eq!(config.plugin_names(), vec!["ginga"]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_from_env, parse_config, ConfigSource, CONFIG_ENV_VAR,
    CONFIG_FILE_NAME,
};
pub use schema::{DisplayConfig, PluginSpec, DEFAULT_REQUIRED_PLUGINS};
