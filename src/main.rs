//! CLI entry point for the sliding-tile number puzzle

use clap::Parser;
use number_puzzle::io::cli::{Cli, Launcher};
use number_puzzle::io::logging::init_logging;

fn main() -> number_puzzle::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    Launcher::new(cli).launch()
}
