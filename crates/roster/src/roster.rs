//! Main Roster struct and public API.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clean::{Cleaner, CleaningReport};
use crate::config::RosterConfig;
use crate::error::Result;
use crate::input::Parser;
use crate::output::{load_cleaned, write_cleaned};
use crate::report::{render_figures, write_insights};
use crate::schema::EmployeeRecord;
use crate::validation::validate_records;

/// Outputs of a full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub cleaning: CleaningReport,
    pub insights: PathBuf,
    pub figures: Vec<PathBuf>,
}

/// Pipeline entry point. Each stage reads and writes the paths in its
/// [`RosterConfig`].
pub struct Roster {
    config: RosterConfig,
    parser: Parser,
    cleaner: Cleaner,
}

impl Roster {
    /// Create a pipeline with default paths and bounds.
    pub fn new() -> Self {
        Self::with_config(RosterConfig::default())
    }

    pub fn with_config(config: RosterConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let cleaner = Cleaner::with_params(config.cleaning);
        Self {
            config,
            parser,
            cleaner,
        }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Clean the raw table and write the cleaned table.
    ///
    /// The result is validated before anything is written, so a failing run
    /// leaves any previous output untouched.
    pub fn clean(&self) -> Result<CleaningReport> {
        let paths = &self.config.paths;
        let (table, source) = self.parser.parse_file(&paths.raw_input)?;

        let outcome = self.cleaner.clean_table(&table)?;
        validate_records(&outcome.records, self.cleaner.params())?;
        write_cleaned(&paths.cleaned_output, &outcome.records)?;

        let mut report = outcome.report;
        report.source = Some(source);
        Ok(report)
    }

    /// Re-check the cleaned table on disk.
    pub fn validate(&self) -> Result<Vec<EmployeeRecord>> {
        let records = load_cleaned(&self.config.paths.cleaned_output, &self.config.cleaning)?;
        info!(rows = records.len(), "cleaned table passed validation");
        Ok(records)
    }

    /// Write the markdown insights document, returning its path.
    pub fn insights(&self) -> Result<PathBuf> {
        let records = self.validate()?;
        let path = self.config.paths.insights_output.clone();
        write_insights(&path, &records)?;
        Ok(path)
    }

    /// Render the charts, returning the written files.
    pub fn figures(&self) -> Result<Vec<PathBuf>> {
        let records = self.validate()?;
        render_figures(&records, &self.config.paths.figures_dir)
    }

    /// Run every stage in order.
    pub fn run(&self) -> Result<RunSummary> {
        let cleaning = self.clean()?;
        let insights = self.insights()?;
        let figures = self.figures()?;
        Ok(RunSummary {
            cleaning,
            insights,
            figures,
        })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;
    use crate::config::PathsConfig;
    use crate::error::RosterError;

    const RAW: &str = "\
employee_id,age,department,salary,years_experience,remote,hired_date
1,34,eng,\"$1,200\",5,yes,2020-01-15
2,15,Sales,900,1,no,2021-02-01
3,41,Engineering,not_available,12,Y,not-a-date
4,29,mkt,800,3,n,2019-07-30
";

    fn config_in(dir: &Path) -> RosterConfig {
        RosterConfig {
            paths: PathsConfig {
                raw_input: dir.join("raw.csv"),
                cleaned_output: dir.join("cleaned").join("cleaned.csv"),
                insights_output: dir.join("reports").join("insights.md"),
                figures_dir: dir.join("reports").join("figures"),
            },
            ..RosterConfig::default()
        }
    }

    #[test]
    fn test_clean_writes_validated_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("raw.csv"), RAW).unwrap();
        let roster = Roster::with_config(config_in(dir.path()));

        let report = roster.clean().unwrap();
        assert_eq!(report.rows_read, 4);
        assert_eq!(report.rows_kept, 3);
        assert_eq!(report.source.as_ref().unwrap().file, "raw.csv");

        let records = roster.validate().unwrap();
        assert_eq!(records.len(), 3);
        let imputed = records
            .iter()
            .find(|r| r.id_label() == "3")
            .unwrap();
        assert_eq!(imputed.salary_usd, Some(1200.0));
        assert_eq!(imputed.hired_date, None);
    }

    #[test]
    fn test_downstream_stages_need_cleaned_table() {
        let dir = tempdir().unwrap();
        let roster = Roster::with_config(config_in(dir.path()));

        match roster.insights() {
            Err(RosterError::MissingInput { hint, .. }) => assert_eq!(hint, "roster clean"),
            other => panic!("expected missing input, got {:?}", other),
        }
        assert!(roster.figures().is_err());
    }

    #[test]
    fn test_run_produces_every_artifact() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("raw.csv"), RAW).unwrap();
        let config = config_in(dir.path());
        let roster = Roster::with_config(config.clone());

        let summary = roster.run().unwrap();

        assert!(config.paths.cleaned_output.exists());
        assert!(summary.insights.exists());
        assert_eq!(summary.figures.len(), 3);
    }
}
