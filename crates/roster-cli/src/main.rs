//! Roster CLI - employee data cleaning pipeline.

mod cli;
mod commands;
mod telemetry;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = cli.config;
    let result = match cli.command {
        Commands::Clean {
            input,
            output,
            json,
        } => commands::clean::run(config, input, output, json, cli.verbose),

        Commands::Validate { file } => commands::validate::run(config, file),

        Commands::Insights { input, output } => commands::insights::run(config, input, output),

        Commands::Figures { input, dir } => commands::figures::run(config, input, dir),

        Commands::Run => commands::run::run(config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
