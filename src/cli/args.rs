//! CLI argument definitions.
//!
//! The health check takes no options. [`Cli`] exists so clap provides
//! `--help`, `--version`, and rejects anything else.

use clap::Parser;

/// Verify that the display plugins the reduction pipeline needs are installed.
///
/// Reads `chk_plugins.yml` from the working directory (or the file named by
/// `CHK_PLUGINS_CONFIG`) to find the Python interpreter and required plugins.
#[derive(Debug, Parser)]
#[command(name = "chk_plugins")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
