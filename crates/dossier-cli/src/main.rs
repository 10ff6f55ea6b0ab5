//! Dossier CLI - validate and sort personal-record datasets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            file,
            valid,
            invalid,
            json,
            strict_national_id,
            no_progress,
        } => commands::validate::run(
            file,
            valid,
            invalid,
            json,
            strict_national_id,
            no_progress,
            cli.verbose,
        ),

        Commands::Sort {
            file,
            key,
            output,
            blob,
        } => commands::sort::run(file, key, output, blob, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
