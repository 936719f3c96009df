//! gantry - assemble and inspect end-to-end browser test configuration.
//!
//! Entry point: parses arguments, initializes logging, dispatches commands.

use anyhow::Result;
use clap::Parser;
use gantry_cli::{cli, commands, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Devices(devices_args) => commands::devices_execute(&devices_args),
        cli::Command::Show(show_args) => commands::show_execute(&show_args),
        cli::Command::Check(check_args) => commands::check_execute(&check_args),
    }
}
