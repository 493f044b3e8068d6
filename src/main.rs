mod cli;
mod config;
mod construct_cmd;
mod convert;
mod logging;
mod render;
mod search_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Search(args) => search_cmd::run(args),
        Command::Construct(args) => construct_cmd::run(args),
    }
}
