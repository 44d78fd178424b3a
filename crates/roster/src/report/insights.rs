//! Markdown insights document.

use std::fs;
use std::path::Path;

use tracing::info;

use super::stats::SalarySummary;
use crate::error::{Result, RosterError};
use crate::schema::EmployeeRecord;

/// Standing observations printed after the computed ones.
const NOTES: [&str; 2] = [
    "Salaries vary widely even within a department, suggesting experience and role level matter.",
    "Remote status alone does not fully explain salary differences in this small sample.",
];

/// Render the insights document for a cleaned table.
pub fn render_insights(records: &[EmployeeRecord]) -> String {
    let summary = SalarySummary::from_records(records);
    let mut out = String::from("# Insights\n\n");

    out.push_str("## Dataset overview\n\n");
    let departments: Vec<&str> = summary.departments.iter().map(|d| d.as_str()).collect();
    out.push_str(&format!("- Rows: {}\n", summary.rows));
    out.push_str(&format!("- Departments: {}\n\n", departments.join(", ")));

    out.push_str("## Salary by department\n\n");
    out.push_str("| department | count | mean | median | min | max |\n");
    out.push_str("|:--|--:|--:|--:|--:|--:|\n");
    for stat in &summary.by_department {
        out.push_str(&format!(
            "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            stat.department, stat.count, stat.mean, stat.median, stat.min, stat.max
        ));
    }
    out.push('\n');

    out.push_str("## Remote vs on-site\n\n");
    out.push_str("| remote | count | avg_salary_usd |\n");
    out.push_str("|:--|--:|--:|\n");
    for group in &summary.by_remote {
        out.push_str(&format!(
            "| {} | {} | {:.2} |\n",
            group.remote, group.count, group.mean
        ));
    }
    out.push('\n');

    out.push_str("## Notable observations\n\n");
    match summary.top_department() {
        Some(top) => out.push_str(&format!("- Highest average salary is in **{}**.\n", top)),
        None => out.push_str("- No salaries recorded.\n"),
    }
    for note in NOTES {
        out.push_str(&format!("- {}\n", note));
    }

    out
}

/// Write the insights document to `path`, creating parent directories.
pub fn write_insights(path: impl AsRef<Path>, records: &[EmployeeRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
        }
    }

    fs::write(path, render_insights(records)).map_err(|e| RosterError::io(path, e))?;
    info!(path = %path.display(), rows = records.len(), "wrote insights");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::schema::{Department, EmployeeId};

    fn record(
        id: &str,
        department: Department,
        remote: Option<bool>,
        salary: f64,
    ) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: EmployeeId::parse(id),
            age: Some(40.0),
            department,
            years_experience: Some(8.0),
            remote,
            hired_date: None,
            salary_usd: Some(salary),
        }
    }

    fn sample() -> Vec<EmployeeRecord> {
        vec![
            record("1", Department::Sales, Some(true), 50_000.0),
            record("2", Department::Engineering, Some(false), 110_000.0),
            record("3", Department::Engineering, None, 90_000.0),
        ]
    }

    #[test]
    fn test_render_sections() {
        let text = render_insights(&sample());

        assert!(text.starts_with("# Insights\n"));
        assert!(text.contains("- Rows: 3"));
        assert!(text.contains("- Departments: Engineering, Sales"));
        assert!(text.contains("| Engineering | 2 | 100000.00 | 100000.00 | 90000.00 | 110000.00 |"));
        assert!(text.contains("| false | 1 | 110000.00 |"));
        assert!(text.contains("| true | 1 | 50000.00 |"));
        assert!(text.contains("- Highest average salary is in **Engineering**."));
    }

    #[test]
    fn test_observations_include_standing_notes() {
        let text = render_insights(&sample());
        let observations = &text[text.find("## Notable observations").unwrap()..];

        assert!(observations.contains("- Highest average salary is in **Engineering**.\n"));
        assert!(observations.contains(
            "- Salaries vary widely even within a department, suggesting experience and role level matter.\n"
        ));
        assert!(observations.ends_with(
            "- Remote status alone does not fully explain salary differences in this small sample.\n"
        ));
    }

    #[test]
    fn test_empty_table_still_renders() {
        let text = render_insights(&[]);
        assert!(text.contains("- Rows: 0"));
        assert!(text.contains("- No salaries recorded.\n"));
    }

    #[test]
    fn test_department_rows_follow_mean() {
        let text = render_insights(&sample());
        let eng = text.find("| Engineering |").unwrap();
        let sales = text.find("| Sales |").unwrap();
        assert!(eng < sales);
    }

    #[test]
    fn test_write_insights() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("insights.md");

        write_insights(&path, &sample()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("## Notable observations"));
    }
}
