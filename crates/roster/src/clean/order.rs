//! Deterministic output ordering.

use std::cmp::Ordering;

use crate::schema::EmployeeRecord;

/// Order by department ascending, salary descending, then employee id
/// ascending. Missing salaries sort last within their department.
pub fn compare_records(a: &EmployeeRecord, b: &EmployeeRecord) -> Ordering {
    a.department
        .cmp(&b.department)
        .then_with(|| salary_descending(a.salary_usd, b.salary_usd))
        .then_with(|| a.employee_id.cmp(&b.employee_id))
}

/// Sort records in place into output order.
pub fn sort_records(records: &mut [EmployeeRecord]) {
    records.sort_by(compare_records);
}

fn salary_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Department, EmployeeId};

    fn record(id: &str, department: Department, salary: Option<f64>) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: EmployeeId::parse(id),
            age: Some(30.0),
            department,
            years_experience: Some(1.0),
            remote: None,
            hired_date: None,
            salary_usd: salary,
        }
    }

    fn ids(records: &[EmployeeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id_label()).collect()
    }

    #[test]
    fn test_department_then_salary_descending() {
        let mut records = vec![
            record("1", Department::Sales, Some(10.0)),
            record("2", Department::Engineering, Some(5.0)),
            record("3", Department::Engineering, Some(9.0)),
            record("4", Department::HR, Some(1.0)),
        ];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["3", "2", "4", "1"]);
    }

    #[test]
    fn test_ties_broken_by_employee_id() {
        let mut records = vec![
            record("12", Department::Sales, Some(10.0)),
            record("3", Department::Sales, Some(10.0)),
            record("7", Department::Sales, Some(10.0)),
        ];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["3", "7", "12"]);
    }

    #[test]
    fn test_missing_salary_sorts_last() {
        let mut records = vec![
            record("1", Department::HR, None),
            record("2", Department::HR, Some(1.0)),
        ];
        sort_records(&mut records);
        assert_eq!(ids(&records), vec!["2", "1"]);
    }
}
