//! Validate command - re-check a cleaned table.

use std::path::PathBuf;

use colored::Colorize;
use roster::Roster;

use super::load_config;

pub fn run(
    config: Option<PathBuf>,
    file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if let Some(file) = file {
        config.paths.cleaned_output = file;
    }

    let roster = Roster::with_config(config);
    let records = roster.validate()?;

    println!(
        "{} {} ({} rows)",
        "Validation passed:".green().bold(),
        roster.config().paths.cleaned_output.display(),
        records.len()
    );
    Ok(())
}
