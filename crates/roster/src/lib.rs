//! Roster: cleaning pipeline for messy employee tables.
//!
//! Roster reads a raw employee table, normalizes every field, drops rows
//! outside the configured bounds, fills missing salaries from medians and
//! writes a deterministically ordered, validated table. Reports are built
//! from the cleaned table only.
//!
//! # Core Principles
//!
//! - **Total normalization**: field parsers never fail, they report missing
//! - **Validated writes**: nothing reaches disk that breaks an invariant
//! - **Deterministic output**: the same input always yields the same bytes
//!
//! # Example
//!
//! ```no_run
//! use roster::Roster;
//!
//! let roster = Roster::new();
//! let report = roster.clean().unwrap();
//!
//! println!("Rows kept: {}", report.rows_kept);
//! println!("Salaries imputed: {}", report.salaries_imputed());
//! ```

pub mod clean;
pub mod config;
pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod report;
pub mod schema;
pub mod validation;

mod roster;

pub use crate::roster::{Roster, RunSummary};
pub use clean::{Cleaner, CleaningOutcome, CleaningReport};
pub use config::{CleaningParams, PathsConfig, RosterConfig};
pub use error::{Result, RosterError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use schema::{Department, EmployeeId, EmployeeRecord};
pub use validation::{validate_cleaned, validate_raw, validate_records, Violation};
