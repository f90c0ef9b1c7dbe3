//! CLI definition using clap

use clap::{Parser, Subcommand};
use rental_types::OutputFormat;

#[derive(Parser)]
#[command(name = "rental-desk")]
#[command(version)]
#[command(about = "Console vehicle rental management")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive rental shell (the default)
    Shell,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set a free-text footer line for rendered invoices
        #[arg(long)]
        set_footer: Option<String>,

        /// Clear the invoice footer
        #[arg(long)]
        clear_footer: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
