//! Cleaning pipeline benchmarks.
//!
//! Measures parsing, normalization and cleaning across table sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use roster::normalize::normalize_table;
use roster::{Cleaner, Parser};

const DEPARTMENTS: [&str; 7] = [
    "eng",
    "Engineering",
    "sales",
    "mkt",
    "HR",
    "Human Resources",
    "ops",
];
const REMOTE: [&str; 6] = ["yes", "no", "Y", "n", "", "maybe"];

/// Generate a messy employee table with the specified number of rows.
fn generate_messy_csv(rows: usize) -> String {
    let mut data =
        String::from("employee_id,age,department,salary,years_experience,remote,hired_date\n");

    for row in 0..rows {
        let age = if row % 17 == 0 { 12 } else { 20 + row % 50 };
        let salary = match row % 9 {
            0 => "not_available".to_string(),
            1 => format!("\"${},{:03}\"", 40 + row % 80, row % 1000),
            _ => format!("{}", 35_000 + (row * 37) % 90_000),
        };
        let hired = if row % 11 == 0 {
            "not-a-date".to_string()
        } else {
            format!("20{:02}-{:02}-{:02}", row % 24, (row % 12) + 1, (row % 28) + 1)
        };

        data.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            row + 1,
            age,
            DEPARTMENTS[row % DEPARTMENTS.len()],
            salary,
            row % 40,
            REMOTE[row % REMOTE.len()],
            hired
        ));
    }

    data
}

/// Benchmark parsing and normalizing the raw table.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_messy_csv(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| {
                let table = Parser::new().parse_str(data).unwrap();
                black_box(normalize_table(&table).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark filtering, imputation and sorting on normalized records.
fn bench_clean_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_records");
    let cleaner = Cleaner::new();

    for rows in [100, 1_000, 10_000].iter() {
        let table = Parser::new().parse_str(&generate_messy_csv(*rows)).unwrap();
        let records = normalize_table(&table).unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &records, |b, records| {
            b.iter_with_setup(
                || records.clone(),
                |records| black_box(cleaner.clean_records(records)),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_clean_records);
criterion_main!(benches);
