//! Schema validation for raw and cleaned tables.

mod validators;
mod violation;

pub use validators::{validate_cleaned, validate_raw, validate_records};
pub use violation::Violation;
