//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait
//! - [`check`] - The plugin check command

pub mod args;
pub mod check;
pub mod command;

pub use args::Cli;
pub use check::CheckCommand;
pub use command::Command;
