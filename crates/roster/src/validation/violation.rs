//! Invariant violations reported for cleaned tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A broken invariant on the cleaned table.
///
/// Only the first violation found is reported; checks run in a fixed order
/// so the same table always yields the same violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// No rows survived cleaning.
    Empty,
    /// Salaries that could not be imputed.
    MissingSalary { count: usize },
    /// A salary at or below zero.
    NonPositiveSalary { employee_id: String, value: f64 },
    /// Rows without an identifier.
    MissingEmployeeId { count: usize },
    /// The same identifier on more than one row.
    DuplicateEmployeeId { employee_id: String },
    /// Not a single row has a parseable hire date.
    NoValidHiredDate,
    /// A remote cell other than true, false or empty.
    InvalidRemote { value: String },
    /// Age missing or out of bounds.
    InvalidAge {
        employee_id: String,
        value: Option<f64>,
    },
    /// Years of experience missing or out of bounds.
    InvalidExperience {
        employee_id: String,
        value: Option<f64>,
    },
    /// A department label outside the canonical set.
    InvalidDepartment { value: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "is empty"),
            Violation::MissingSalary { count } => {
                write!(f, "contains {} missing salary_usd values", count)
            }
            Violation::NonPositiveSalary { employee_id, value } => write!(
                f,
                "contains non-positive salary_usd values (employee {}: {})",
                employee_id, value
            ),
            Violation::MissingEmployeeId { count } => {
                write!(f, "contains {} missing employee_id values", count)
            }
            Violation::DuplicateEmployeeId { employee_id } => write!(
                f,
                "contains duplicate employee_id values ({})",
                employee_id
            ),
            Violation::NoValidHiredDate => write!(f, "contains no valid hired_date values"),
            Violation::InvalidRemote { value } => {
                write!(f, "contains invalid remote values ({:?})", value)
            }
            Violation::InvalidAge { employee_id, value } => write!(
                f,
                "contains invalid age values (employee {}: {})",
                employee_id,
                describe(*value)
            ),
            Violation::InvalidExperience { employee_id, value } => write!(
                f,
                "contains invalid years_experience values (employee {}: {})",
                employee_id,
                describe(*value)
            ),
            Violation::InvalidDepartment { value } => {
                write!(f, "contains invalid department values ({:?})", value)
            }
        }
    }
}

fn describe(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "missing".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Violation::Empty.to_string(), "is empty");
        assert_eq!(
            Violation::InvalidAge {
                employee_id: "7".into(),
                value: None
            }
            .to_string(),
            "contains invalid age values (employee 7: missing)"
        );
        assert_eq!(
            Violation::DuplicateEmployeeId {
                employee_id: "12".into()
            }
            .to_string(),
            "contains duplicate employee_id values (12)"
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(Violation::MissingSalary { count: 2 }).unwrap();
        assert_eq!(json["kind"], "missing_salary");
        assert_eq!(json["count"], 2);
    }
}
