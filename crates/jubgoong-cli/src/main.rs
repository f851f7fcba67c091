//! JubGoong - shrimp weighing ledger
//!
//! A CLI tool for recording weighed baskets of shrimp by lot and
//! transport, and computing weight and price statistics.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
