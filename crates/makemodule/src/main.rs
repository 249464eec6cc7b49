mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::RunOptions;
use makemodule_core::error::CheckoutError;
use tracing_subscriber::EnvFilter;

/// Exit code for a working directory that is not a checkout of the project
const EXIT_BAD_CHECKOUT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            if let Some(checkout) = err.downcast_ref::<CheckoutError>() {
                eprintln!("Error: {checkout}");
                eprintln!("makemodule must be run from the top-level directory of the project checkout.");
                return ExitCode::from(EXIT_BAD_CHECKOUT);
            }
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    tracing::debug!(
        dry_run = cli.dry_run,
        directory = %cli.directory.display(),
        "Parsed command line"
    );

    let options = RunOptions::new(
        cli.dry_run,
        &cli.directory,
        cli.config.as_deref(),
        cli.no_config,
    );

    match &cli.command {
        Commands::Generate => {
            commands::Generate::execute(&options).context("Failed to execute generate command")?;
        }
        Commands::Check => {
            let up_to_date =
                commands::Check::execute(&options).context("Failed to execute check command")?;
            if !up_to_date {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config => {
            commands::Config::execute(&options).context("Failed to execute config command")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
