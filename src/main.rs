//! chk_plugins CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use chk_plugins::cli::{CheckCommand, Cli, Command};
use chk_plugins::config::load_from_env;
use chk_plugins::display::InterpreterProbe;
use chk_plugins::platform::is_ci;
use chk_plugins::ui::{create_ui, UserInterface};
use chk_plugins::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` when set, otherwise WARN. Logs go to
/// stderr so stdout carries only the check's own message.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chk_plugins=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(ui: &mut dyn UserInterface) -> Result<()> {
    let working_dir =
        std::env::current_dir().context("Failed to determine the working directory")?;
    let config = load_from_env(&working_dir)?;
    tracing::debug!(
        "Checking {} plugins with '{}'",
        config.required_plugins.len(),
        config.python
    );

    let cmd = CheckCommand::new(InterpreterProbe::from_config(&config));
    cmd.execute(ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("chk_plugins starting with args: {:?}", cli);

    let mut ui = create_ui(!is_ci());

    match run(ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
