//! Figures command - render SVG charts.

use std::path::PathBuf;

use colored::Colorize;
use roster::Roster;

use super::load_config;

pub fn run(
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if let Some(input) = input {
        config.paths.cleaned_output = input;
    }
    if let Some(dir) = dir {
        config.paths.figures_dir = dir;
    }

    let roster = Roster::with_config(config);
    let written = roster.figures()?;

    println!(
        "{} {}",
        "Saved figures to:".green(),
        roster.config().paths.figures_dir.display()
    );
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}
