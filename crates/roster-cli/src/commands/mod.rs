//! CLI command implementations.

pub mod clean;
pub mod figures;
pub mod insights;
pub mod run;
pub mod validate;

use std::path::PathBuf;

use roster::RosterConfig;

/// Defaults, overridden by the `--config` file when one is given.
pub fn load_config(path: Option<PathBuf>) -> Result<RosterConfig, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(RosterConfig::load(p)?),
        None => Ok(RosterConfig::default()),
    }
}
