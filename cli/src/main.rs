mod cli_args;
mod commands;
mod error;
mod logging;

use std::{io, process::ExitCode};

use clap::Parser;
use cli_args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match commands::run(&cli, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
