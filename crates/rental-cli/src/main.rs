//! rental-desk - console vehicle rental management
//!
//! Tracks vehicles, customers, and bookings in memory for one session.

use clap::Parser;
use rental_cli::cli::Cli;
use rental_cli::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
