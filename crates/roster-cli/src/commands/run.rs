//! Run command - every stage in order.

use std::path::PathBuf;

use colored::Colorize;
use roster::Roster;

use super::clean::print_report;
use super::load_config;

pub fn run(config: Option<PathBuf>, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let roster = Roster::with_config(load_config(config)?);
    let paths = &roster.config().paths;

    println!(
        "{} {}",
        "Running pipeline on".cyan().bold(),
        paths.raw_input.display().to_string().white()
    );

    let summary = roster.run()?;

    print_report(&summary.cleaning, verbose);
    println!();
    println!("{}", "Outputs:".yellow().bold());
    println!("  Cleaned:  {}", paths.cleaned_output.display());
    println!("  Insights: {}", summary.insights.display());
    println!("  Figures:  {}", paths.figures_dir.display());
    println!();
    println!("{}", "Pipeline complete.".green().bold());
    Ok(())
}
