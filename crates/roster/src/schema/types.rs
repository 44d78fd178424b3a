//! Core value types shared by every stage.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Canonical department label.
///
/// Variants are declared in label order, so the derived `Ord` sorts
/// departments ascending by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    HR,
    Marketing,
    Other,
    Sales,
}

impl Department {
    /// Every canonical department, in label order.
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::HR,
        Department::Marketing,
        Department::Other,
        Department::Sales,
    ];

    /// The canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::HR => "HR",
            Department::Marketing => "Marketing",
            Department::Other => "Other",
            Department::Sales => "Sales",
        }
    }

    /// Parse an exact canonical label, as written to the cleaned file.
    pub fn from_label(label: &str) -> Option<Department> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == label.trim())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque employee identifier.
///
/// Identifiers that are both integers compare numerically; integers sort
/// before any non-integer identifier, and the rest compare as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Read an identifier cell. Empty and null-like cells are missing.
    pub fn parse(raw: &str) -> Option<EmployeeId> {
        if DataTable::is_null_value(raw) {
            return None;
        }
        Some(EmployeeId(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn as_integer(&self) -> Option<i128> {
        self.0.parse().ok()
    }
}

impl Ord for EmployeeId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            // Fall back to text so "01" and "1" stay distinct
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for EmployeeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EmployeeId {
        EmployeeId::parse(s).unwrap()
    }

    #[test]
    fn test_department_order_follows_labels() {
        let mut labels: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();
        labels.sort();
        let ordered: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(labels, ordered);
        assert!(Department::HR < Department::Marketing);
    }

    #[test]
    fn test_department_from_label_is_exact() {
        assert_eq!(Department::from_label("HR"), Some(Department::HR));
        assert_eq!(Department::from_label(" Sales "), Some(Department::Sales));
        assert_eq!(Department::from_label("eng"), None);
    }

    #[test]
    fn test_employee_id_numeric_order() {
        assert!(id("2") < id("10"));
        assert!(id("10") < id("E1"));
        assert!(id("E10") < id("E2"));
        assert_ne!(id("01"), id("1"));
    }

    #[test]
    fn test_employee_id_missing() {
        assert_eq!(EmployeeId::parse("  "), None);
        assert_eq!(EmployeeId::parse("NA"), None);
        assert_eq!(id(" 1001 ").as_str(), "1001");
    }
}
