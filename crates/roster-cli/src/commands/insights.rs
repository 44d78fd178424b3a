//! Insights command - write the markdown summary.

use std::path::PathBuf;

use colored::Colorize;
use roster::Roster;

use super::load_config;

pub fn run(
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if let Some(input) = input {
        config.paths.cleaned_output = input;
    }
    if let Some(output) = output {
        config.paths.insights_output = output;
    }

    let path = Roster::with_config(config).insights()?;
    println!("{} {}", "Wrote insights to:".green(), path.display());
    Ok(())
}
