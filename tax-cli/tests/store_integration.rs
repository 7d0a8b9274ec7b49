//! The input form backed by a real TOML file.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_cli::state::{InputField, InputForm};
use tax_core::{InputStore, TaxCalculator};
use tax_store_toml::TomlFileStore;
use tempfile::TempDir;

#[test]
fn values_survive_between_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.toml");

    let mut form = InputForm::load(TomlFileStore::open(&path).unwrap());
    assert!(form.set(InputField::Salary, "6,000,000"));
    assert!(form.set(InputField::GeneralDependants, "1"));
    drop(form);

    let form = InputForm::load(TomlFileStore::open(&path).unwrap());
    assert_eq!(form.text(InputField::Salary), "6,000,000");
    assert_eq!(form.inputs().general_dependants, 1);
    assert_eq!(form.store().get("generalDependantCount").unwrap().as_deref(), Some("1"));
}

#[test]
fn fresh_store_shows_default_scenario() {
    let dir = TempDir::new().unwrap();
    let form = InputForm::load(TomlFileStore::open(dir.path().join("inputs.toml")).unwrap());

    let breakdown = form.breakdown(&TaxCalculator::default());

    assert_eq!(breakdown.salary_deduction, dec!(980000));
    assert_eq!(breakdown.total_tax, dec!(78617));
}

#[test]
fn reset_rewrites_every_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.toml");

    let mut form = InputForm::load(TomlFileStore::open(&path).unwrap());
    form.set(InputField::Salary, "1");
    assert!(form.reset());

    let reopened = TomlFileStore::open(&path).unwrap();
    for &field in InputField::all() {
        assert_eq!(
            reopened.get(field.storage_key()).unwrap().as_deref(),
            Some(field.default_text())
        );
    }
}

#[test]
fn unwritable_store_still_calculates_from_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("inputs.toml");

    let mut form = InputForm::load(TomlFileStore::open(&path).unwrap());
    assert!(!form.set(InputField::OtherTaxDeduction, "77,000"));

    assert_eq!(form.breakdown(&TaxCalculator::default()).total_tax, dec!(0));
    assert!(!path.exists());
}
