//! Integration tests that run the batch path against an on-disk fixture.

use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_cli::{csv_loader, report};
use tax_core::TaxCalculator;

fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("scenarios.csv")
        .leak()
}

fn total_taxes() -> Vec<Decimal> {
    let calculator = TaxCalculator::default();
    csv_loader::load_from_file(fixture_path())
        .unwrap()
        .iter()
        .map(|s| calculator.calculate(&s.inputs).total_tax)
        .collect()
}

#[test]
fn fixture_loads_every_row() {
    let scenarios =
        csv_loader::load_from_file(fixture_path()).expect("fixture file should load without error");

    let labels: Vec<_> = scenarios.iter().map(|s| s.label.as_deref()).collect();
    assert_eq!(
        labels,
        vec![Some("base"), Some("side business"), Some("family"), Some("no income")]
    );
}

#[test]
fn fixture_rows_map_to_inputs() {
    let scenarios = csv_loader::load_from_file(fixture_path()).unwrap();

    let side = &scenarios[1].inputs;
    assert_eq!(side.business_revenue, dec!(1200000));
    assert_eq!(side.business_expense, dec!(300000));

    let family = &scenarios[2].inputs;
    assert_eq!(family.general_family_dependants, 1);
    assert_eq!(family.elder_family_dependants, 0);
    assert_eq!(family.specific_dependants, 1);
    assert_eq!(family.general_dependants, 1);
}

#[test]
fn fixture_total_taxes() {
    assert_eq!(
        total_taxes(),
        vec![dec!(78617), dec!(149576.5), dec!(154681.5), Decimal::ZERO]
    );
}

#[test]
fn batch_report_has_one_row_per_scenario() {
    let calculator = TaxCalculator::default();
    let results: Vec<_> = csv_loader::load_from_file(fixture_path())
        .unwrap()
        .into_iter()
        .map(|s| {
            let breakdown = calculator.calculate(&s.inputs);
            (s, breakdown)
        })
        .collect();

    let text = report::render_batch(&results);
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 5);
    assert!(rows[2].starts_with("side business"));
    assert!(rows[2].contains("10%"));
    assert!(rows[2].ends_with("¥149,577"));
    assert!(rows[4].ends_with("¥0"));
}
