//! Loading a previously cleaned table for downstream stages.

use std::path::Path;

use tracing::debug;

use crate::config::CleaningParams;
use crate::error::{Result, RosterError};
use crate::input::Parser;
use crate::schema::EmployeeRecord;
use crate::validation::validate_cleaned;

/// Read the cleaned table at `path` and re-check every invariant.
///
/// Fails fast with [`RosterError::MissingInput`] if the file does not exist.
pub fn load_cleaned(
    path: impl AsRef<Path>,
    bounds: &CleaningParams,
) -> Result<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RosterError::MissingInput {
            path: path.to_path_buf(),
            hint: "roster clean".to_string(),
        });
    }

    let (table, source) = Parser::new().parse_file(path)?;
    debug!(
        file = %source.file,
        rows = source.row_count,
        hash = %source.hash,
        "loaded cleaned table"
    );

    validate_cleaned(&table, bounds)
}
