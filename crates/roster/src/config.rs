//! Pipeline configuration.
//!
//! Every stage receives its paths and bounds explicitly. A JSON file may
//! override any subset of the defaults:
//!
//! ```json
//! {
//!   "paths": { "raw_input": "input/employees.csv" },
//!   "cleaning": { "age_min": 18.0 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::input::ParserConfig;

/// File locations used by the pipeline stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Raw, messy input table.
    pub raw_input: PathBuf,
    /// Cleaned output table.
    pub cleaned_output: PathBuf,
    /// Markdown insights document.
    pub insights_output: PathBuf,
    /// Directory receiving chart files.
    pub figures_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_input: PathBuf::from("data/raw/messy_dataset.csv"),
            cleaned_output: PathBuf::from("data/cleaned/cleaned_dataset.csv"),
            insights_output: PathBuf::from("reports/insights.md"),
            figures_dir: PathBuf::from("reports/figures"),
        }
    }
}

/// Inclusive bounds applied when filtering rows and when validating the
/// cleaned table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningParams {
    pub age_min: f64,
    pub age_max: f64,
    pub experience_min: f64,
    pub experience_max: f64,
}

impl Default for CleaningParams {
    fn default() -> Self {
        Self {
            age_min: 16.0,
            age_max: 80.0,
            experience_min: 0.0,
            experience_max: 60.0,
        }
    }
}

impl CleaningParams {
    /// Returns true if `age` lies within the age bounds.
    pub fn age_in_range(&self, age: f64) -> bool {
        (self.age_min..=self.age_max).contains(&age)
    }

    /// Returns true if `years` lies within the experience bounds.
    pub fn experience_in_range(&self, years: f64) -> bool {
        (self.experience_min..=self.experience_max).contains(&years)
    }

    /// Reject inverted or non-finite bounds.
    pub fn check(&self) -> Result<()> {
        let pairs = [
            ("age", self.age_min, self.age_max),
            ("experience", self.experience_min, self.experience_max),
        ];
        for (name, min, max) in pairs {
            if !min.is_finite() || !max.is_finite() {
                return Err(RosterError::Config(format!(
                    "{} bounds must be finite numbers",
                    name
                )));
            }
            if min > max {
                return Err(RosterError::Config(format!(
                    "{} lower bound {} exceeds upper bound {}",
                    name, min, max
                )));
            }
        }
        Ok(())
    }
}

/// Top-level configuration for a Roster run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub paths: PathsConfig,
    pub cleaning: CleaningParams,
    pub parser: ParserConfig,
}

impl RosterConfig {
    /// Load a configuration file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
        let config: RosterConfig = serde_json::from_str(&text).map_err(|e| {
            RosterError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        config.cleaning.check()?;
        Ok(config)
    }
}
