//! Command handlers

use std::io;

use rental_app::app::RentalService;
use rental_app::config::Config;
use rental_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::shell::Shell;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let format = cli.format.unwrap_or(config.output_format);
            if cli.verbose {
                eprintln!("config: {}", Config::config_path()?.display());
                eprintln!("format: {}", format);
            }
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(
                RentalService::new(),
                format,
                config.invoice_footer,
                stdin.lock(),
                stdout.lock(),
            );
            let result = shell.run();
            if cli.verbose {
                let service = shell.service();
                eprintln!(
                    "session: {} vehicles, {} customers, {} bookings",
                    service.vehicle_count(),
                    service.customer_count(),
                    service.booking_count()
                );
            }
            result
        }
        Commands::Config {
            show,
            set_output,
            set_footer,
            clear_footer,
            reset,
        } => run_config(config, show, set_output, set_footer, clear_footer, reset),
    }
}

fn run_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_footer: Option<String>,
    clear_footer: bool,
    reset: bool,
) -> Result<()> {
    let mut changed = false;

    if reset {
        config = Config::default();
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(footer) = set_footer {
        config.invoice_footer = Some(footer);
        changed = true;
    }
    if clear_footer {
        config.invoice_footer = None;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }
    if show || !changed {
        println!("output_format: {}", config.output_format);
        match &config.invoice_footer {
            Some(footer) => println!("invoice_footer: {}", footer),
            None => println!("invoice_footer: (none)"),
        }
    }
    Ok(())
}
