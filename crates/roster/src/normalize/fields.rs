//! Per-field parsers.
//!
//! Each function is total: malformed input maps to `None` and never panics
//! or errors. Consequences of a missing value are decided by the cleaning
//! stage.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::Department;

/// Salary cells that explicitly mean "no value".
const SALARY_NA_TOKENS: &[&str] = &["n/a", "na", "none", "null", "not_available"];

const REMOTE_TRUE: &[&str] = &["yes", "y", "true", "1"];
const REMOTE_FALSE: &[&str] = &["no", "n", "false", "0"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

// Currency symbols, thousands separators and stray whitespace.
static SALARY_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$€£¥,\s]").unwrap());

/// Parse a salary cell into a positive amount.
pub fn parse_salary(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_lowercase();
    if SALARY_NA_TOKENS.contains(&lower.as_str()) {
        return None;
    }

    let stripped = SALARY_NOISE.replace_all(trimmed, "");
    let value = parse_number(&stripped)?;

    (value > 0.0).then_some(value)
}

/// Map free-text department names onto the canonical set.
pub fn normalize_department(raw: &str) -> Department {
    match raw.trim().to_lowercase().as_str() {
        "engineering" | "eng" => Department::Engineering,
        "sales" => Department::Sales,
        "marketing" | "mkt" => Department::Marketing,
        "hr" | "human resources" => Department::HR,
        _ => Department::Other,
    }
}

/// Coerce a cell to a finite number.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Read a yes/no style token.
pub fn parse_remote(raw: &str) -> Option<bool> {
    let token = raw.trim().to_lowercase();
    if REMOTE_TRUE.contains(&token.as_str()) {
        Some(true)
    } else if REMOTE_FALSE.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parse a calendar date. Date-times keep only their date part.
pub fn parse_hired_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary_currency_and_separators() {
        assert_eq!(parse_salary("$1,200"), Some(1200.0));
        assert_eq!(parse_salary(" 85000 "), Some(85000.0));
        assert_eq!(parse_salary("$ 72,500.50"), Some(72500.5));
        assert_eq!(parse_salary("€3,000"), Some(3000.0));
    }

    #[test]
    fn test_parse_salary_missing_tokens() {
        for token in ["", "  ", "N/A", "na", "None", "NULL", "not_available", "Not_Available"] {
            assert_eq!(parse_salary(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_salary_rejects_garbage_and_non_positive() {
        assert_eq!(parse_salary("lots"), None);
        assert_eq!(parse_salary("0"), None);
        assert_eq!(parse_salary("-500"), None);
        assert_eq!(parse_salary("$"), None);
        assert_eq!(parse_salary("NaN"), None);
        assert_eq!(parse_salary("inf"), None);
    }

    #[test]
    fn test_normalize_department_synonyms() {
        assert_eq!(normalize_department("Engineering"), Department::Engineering);
        assert_eq!(normalize_department(" ENG "), Department::Engineering);
        assert_eq!(normalize_department("sales"), Department::Sales);
        assert_eq!(normalize_department("Mkt"), Department::Marketing);
        assert_eq!(normalize_department("Human Resources"), Department::HR);
        assert_eq!(normalize_department("hr"), Department::HR);
    }

    #[test]
    fn test_normalize_department_fallback() {
        assert_eq!(normalize_department(""), Department::Other);
        assert_eq!(normalize_department("Finance"), Department::Other);
        assert_eq!(normalize_department("s@les"), Department::Other);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("34"), Some(34.0));
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("thirty"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("nan"), None);
    }

    #[test]
    fn test_parse_remote_tokens() {
        assert_eq!(parse_remote("Y"), Some(true));
        assert_eq!(parse_remote(" yes "), Some(true));
        assert_eq!(parse_remote("TRUE"), Some(true));
        assert_eq!(parse_remote("1"), Some(true));
        assert_eq!(parse_remote("no"), Some(false));
        assert_eq!(parse_remote("N"), Some(false));
        assert_eq!(parse_remote("0"), Some(false));
        assert_eq!(parse_remote("maybe"), None);
        assert_eq!(parse_remote(""), None);
    }

    #[test]
    fn test_parse_hired_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 15);
        assert_eq!(parse_hired_date("2021-03-15"), expected);
        assert_eq!(parse_hired_date("2021/03/15"), expected);
        assert_eq!(parse_hired_date("03/15/2021"), expected);
        assert_eq!(parse_hired_date("15.03.2021"), expected);
        assert_eq!(parse_hired_date("March 15, 2021"), expected);
        assert_eq!(parse_hired_date("Mar 15, 2021"), expected);
        assert_eq!(parse_hired_date("2021-03-15 08:30:00"), expected);
        assert_eq!(parse_hired_date("2021-03-15T08:30:00Z"), expected);
    }

    #[test]
    fn test_parse_hired_date_invalid() {
        assert_eq!(parse_hired_date("not-a-date"), None);
        assert_eq!(parse_hired_date("2021-02-30"), None);
        assert_eq!(parse_hired_date(""), None);
    }
}
