//! CLI entry point for bingo card generation and export

use bingo_master::io::cli::{Cli, run};
use clap::Parser;

fn main() -> bingo_master::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
