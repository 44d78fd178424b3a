//! Clean command - normalize, filter, impute and sort the raw table.

use std::path::PathBuf;

use colored::Colorize;
use roster::clean::AuditAction;
use roster::{CleaningReport, Roster};

use super::load_config;

pub fn run(
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if let Some(input) = input {
        config.paths.raw_input = input;
    }
    if let Some(output) = output {
        config.paths.cleaned_output = output;
    }

    if !json_output {
        println!(
            "{} {}",
            "Cleaning".cyan().bold(),
            config.paths.raw_input.display().to_string().white()
        );
    }

    let roster = Roster::with_config(config);
    let report = roster.clean()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, verbose);
    println!(
        "{} {}",
        "Wrote cleaned dataset to:".green(),
        roster.config().paths.cleaned_output.display()
    );

    Ok(())
}

/// Human-readable summary of a cleaning pass.
pub fn print_report(report: &CleaningReport, verbose: bool) {
    println!(
        "Kept {} of {} rows ({} dropped)",
        report.rows_kept.to_string().white().bold(),
        report.rows_read,
        report.rows_dropped().to_string().yellow()
    );
    println!(
        "  Age out of range:        {}",
        report.count(AuditAction::DroppedAge)
    );
    println!(
        "  Experience out of range: {}",
        report.count(AuditAction::DroppedExperience)
    );
    println!(
        "Imputed {} salaries ({} department median, {} global median)",
        report.salaries_imputed().to_string().white().bold(),
        report.count(AuditAction::ImputedDepartmentMedian),
        report.count(AuditAction::ImputedGlobalMedian)
    );

    let unresolved = report.count(AuditAction::SalaryUnresolved);
    if unresolved > 0 {
        println!(
            "{} {} salaries could not be imputed",
            "Warning:".yellow().bold(),
            unresolved
        );
    }

    if verbose && !report.audits.is_empty() {
        println!();
        println!("{}", "Changes:".yellow().bold());
        for audit in &report.audits {
            let value = audit
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:12} {:28} {}",
                audit.employee_id,
                format!("{:?}", audit.action),
                value
            );
        }
    }
}
