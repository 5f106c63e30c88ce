use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;
use log::{error, info};

use attachlimits::{cli::Cli, commands, ATTACHLIMITS_VERSION};

fn setup_logging(args: &Cli) -> Result<(), Error> {
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(args.verbosity)
        .try_init()?;

    Ok(())
}

fn main() -> ExitCode {
    // Parse args
    let args = Cli::parse();

    // Initialize the logger
    if let Err(e) = setup_logging(&args) {
        eprintln!("Failed to initialize logging: {e:?}");
        return ExitCode::from(1);
    }

    info!("attachlimits version: {ATTACHLIMITS_VERSION}");

    let stdout = std::io::stdout();
    match commands::run(&args.command, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command '{}' failed: {e:?}", args.command.name());
            ExitCode::from(2)
        }
    }
}
