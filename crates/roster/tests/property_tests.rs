//! Property-based tests for the normalizers and the cleaning engine.
//!
//! Property-based tests verify:
//! 1. **No panics**: normalizers accept any input
//! 2. **Invariants**: cleaned records always satisfy the bounds
//! 3. **Idempotence**: cleaning cleaned records changes nothing
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p roster --test property_tests
//! ```

use std::cmp::Ordering;

use proptest::prelude::*;

use roster::clean::compare_records;
use roster::normalize::{
    normalize_department, parse_hired_date, parse_number, parse_remote, parse_salary,
};
use roster::{Cleaner, CleaningParams, Department, EmployeeId, EmployeeRecord};

// =============================================================================
// Test Strategies
// =============================================================================

/// Strings shaped like the messy salary cells seen in practice.
fn salary_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[$€£]?[0-9]{1,3}(,[0-9]{3}){0,2}(\\.[0-9]{1,2})?",
        "-?[0-9]{1,7}",
        "(N/A|na|None|NULL|not_available)",
        ".{0,20}",
    ]
}

fn record() -> impl Strategy<Value = EmployeeRecord> {
    (
        0u32..40,
        prop::option::of(0.0f64..100.0),
        0usize..Department::ALL.len(),
        prop::option::of(-5.0f64..70.0),
        prop::option::of(any::<bool>()),
        prop::option::of(1.0f64..200_000.0),
    )
        .prop_map(|(id, age, dept, years, remote, salary)| EmployeeRecord {
            employee_id: EmployeeId::parse(&id.to_string()),
            age,
            department: Department::ALL[dept],
            years_experience: years,
            remote,
            hired_date: None,
            salary_usd: salary,
        })
}

// =============================================================================
// Normalizers
// =============================================================================

proptest! {
    #[test]
    fn salary_is_positive_or_missing(raw in salary_like()) {
        if let Some(value) = parse_salary(&raw) {
            prop_assert!(value.is_finite());
            prop_assert!(value > 0.0);
        }
    }

    #[test]
    fn normalizers_never_panic(raw in "\\PC{0,40}") {
        let _ = parse_salary(&raw);
        let _ = normalize_department(&raw);
        let _ = parse_number(&raw);
        let _ = parse_remote(&raw);
        let _ = parse_hired_date(&raw);
    }

    #[test]
    fn department_ignores_case_and_padding(
        dept in prop::sample::select(vec!["engineering", "eng", "sales", "marketing", "mkt", "hr"]),
        upper in any::<bool>(),
    ) {
        let raw = if upper { dept.to_uppercase() } else { dept.to_string() };
        let padded = format!("  {}\t", raw);
        prop_assert_eq!(normalize_department(&padded), normalize_department(dept));
        prop_assert_ne!(normalize_department(dept), Department::Other);
    }

    #[test]
    fn numeric_ids_order_numerically(a in 0u64..100_000, b in 0u64..100_000) {
        let left = EmployeeId::parse(&a.to_string()).unwrap();
        let right = EmployeeId::parse(&b.to_string()).unwrap();
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }
}

// =============================================================================
// Cleaning
// =============================================================================

proptest! {
    #[test]
    fn cleaned_records_respect_bounds(records in prop::collection::vec(record(), 0..60)) {
        let params = CleaningParams::default();
        let outcome = Cleaner::new().clean_records(records);

        for r in &outcome.records {
            prop_assert!(r.age.is_some_and(|a| params.age_in_range(a)));
            prop_assert!(r.years_experience.is_some_and(|y| params.experience_in_range(y)));
        }
        prop_assert_eq!(outcome.report.rows_kept, outcome.records.len());
    }

    #[test]
    fn salaries_filled_when_any_survivor_has_one(
        records in prop::collection::vec(record(), 1..60),
    ) {
        let outcome = Cleaner::new().clean_records(records);
        let unresolved = outcome.records.iter().filter(|r| r.salary_usd.is_none()).count();
        let any_salary = outcome.records.iter().any(|r| r.salary_usd.is_some());

        if any_salary {
            prop_assert_eq!(unresolved, 0);
        }
    }

    #[test]
    fn cleaned_records_are_sorted(records in prop::collection::vec(record(), 0..60)) {
        let outcome = Cleaner::new().clean_records(records);
        for pair in outcome.records.windows(2) {
            prop_assert_ne!(compare_records(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn cleaning_is_idempotent(records in prop::collection::vec(record(), 0..60)) {
        let cleaner = Cleaner::new();
        let once = cleaner.clean_records(records);
        let twice = cleaner.clean_records(once.records.clone());
        prop_assert_eq!(once.records, twice.records);
    }

    #[test]
    fn ties_break_on_ascending_id(ids in prop::collection::hash_set(0u32..10_000, 2..20)) {
        let records: Vec<EmployeeRecord> = ids
            .iter()
            .map(|id| EmployeeRecord {
                employee_id: EmployeeId::parse(&id.to_string()),
                age: Some(30.0),
                department: Department::Sales,
                years_experience: Some(3.0),
                remote: Some(false),
                hired_date: None,
                salary_usd: Some(50_000.0),
            })
            .collect();

        let outcome = Cleaner::new().clean_records(records);
        let order: Vec<u32> = outcome
            .records
            .iter()
            .map(|r| r.id_label().parse().unwrap())
            .collect();

        let mut expected: Vec<u32> = ids.into_iter().collect();
        expected.sort();
        prop_assert_eq!(order, expected);
    }
}
