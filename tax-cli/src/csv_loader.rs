//! CSV loader for batches of calculation scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name and column order does not matter. Every
//! column is optional; a missing column or an empty cell counts as zero.
//!
//! | Column | Type | Notes |
//! |-----------------------------|---------|-------------------------------|
//! | `label`                     | string  | Shown in the batch report |
//! | `salary`                    | decimal | |
//! | `business_revenue`          | decimal | |
//! | `business_expense`          | decimal | |
//! | `general_family_dependants` | integer | Spouses under 70 |
//! | `elder_family_dependants`   | integer | Spouses aged 70 or over |
//! | `specific_dependants`       | integer | Dependants aged 19 to 22 |
//! | `general_dependants`        | integer | Other dependants |
//! | `other_income_deduction`    | decimal | |
//! | `other_tax_deduction`       | decimal | |
//!
//! ### Example
//!
//! ```csv
//! label,salary,business_revenue,business_expense,general_dependants
//! base,3000000,,,
//! side job,3000000,1200000,300000,1
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::TaxInputs;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    label: Option<String>,
    salary: Option<Decimal>,
    business_revenue: Option<Decimal>,
    business_expense: Option<Decimal>,
    general_family_dependants: Option<u32>,
    elder_family_dependants: Option<u32>,
    specific_dependants: Option<u32>,
    general_dependants: Option<u32>,
    other_income_deduction: Option<Decimal>,
    other_tax_deduction: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One named set of inputs from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: Option<String>,
    pub inputs: TaxInputs,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, type
    /// mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An amount column held a negative value. `row` is 1-based
    /// (header = row 0).
    #[error("negative {column} '{value}' on row {row}")]
    NegativeAmount {
        column: &'static str,
        value: Decimal,
        row: usize,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn amount(
    value: Option<Decimal>,
    column: &'static str,
    row: usize,
) -> Result<Decimal, CsvLoadError> {
    match value {
        Some(v) if v.is_sign_negative() && !v.is_zero() => Err(CsvLoadError::NegativeAmount {
            column,
            value: v,
            row,
        }),
        Some(v) => Ok(v),
        None => Ok(Decimal::ZERO),
    }
}

/// Convert a single CSV row into a [`Scenario`].
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, CsvLoadError> {
    let inputs = TaxInputs {
        salary: amount(row.salary, "salary", row_number)?,
        business_revenue: amount(row.business_revenue, "business_revenue", row_number)?,
        business_expense: amount(row.business_expense, "business_expense", row_number)?,
        general_family_dependants: row.general_family_dependants.unwrap_or_default(),
        elder_family_dependants: row.elder_family_dependants.unwrap_or_default(),
        specific_dependants: row.specific_dependants.unwrap_or_default(),
        general_dependants: row.general_dependants.unwrap_or_default(),
        other_income_deduction: amount(
            row.other_income_deduction,
            "other_income_deduction",
            row_number,
        )?,
        other_tax_deduction: amount(row.other_tax_deduction, "other_tax_deduction", row_number)?,
    };

    Ok(Scenario {
        label: row.label.filter(|l| !l.is_empty()),
        inputs,
    })
}

/// Parse CSV text and return the scenarios in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – if the CSV is structurally invalid or a cell
///   cannot be deserialised.
/// * [`CsvLoadError::NegativeAmount`] – if any amount is negative.
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
salary
3000000
";

    const FULL_CSV: &str = "\
label,salary,business_revenue,business_expense,general_family_dependants,elder_family_dependants,specific_dependants,general_dependants,other_income_deduction,other_tax_deduction
family,6000000,2000000,500000,1,0,1,1,850000,10000
";

    const SPARSE_CSV: &str = "\
label,salary,general_dependants
a,3000000,
,4000000,2
";

    #[test]
    fn minimal_csv_defaults_other_columns_to_zero() {
        let scenarios = load_from_str(MINIMAL_CSV).unwrap();

        assert_eq!(
            scenarios,
            vec![Scenario {
                label: None,
                inputs: TaxInputs::with_salary(dec!(3000000)),
            }]
        );
    }

    #[test]
    fn full_csv_populates_every_field() {
        let scenarios = load_from_str(FULL_CSV).unwrap();

        assert_eq!(scenarios.len(), 1);
        let s = &scenarios[0];
        assert_eq!(s.label.as_deref(), Some("family"));
        assert_eq!(
            s.inputs,
            TaxInputs {
                salary: dec!(6000000),
                business_revenue: dec!(2000000),
                business_expense: dec!(500000),
                general_family_dependants: 1,
                elder_family_dependants: 0,
                specific_dependants: 1,
                general_dependants: 1,
                other_income_deduction: dec!(850000),
                other_tax_deduction: dec!(10000),
            }
        );
    }

    #[test]
    fn empty_cells_count_as_zero() {
        let scenarios = load_from_str(SPARSE_CSV).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].inputs.general_dependants, 0);
        assert_eq!(scenarios[1].label, None);
        assert_eq!(scenarios[1].inputs.general_dependants, 2);
    }

    #[test]
    fn negative_amount_is_rejected_with_row_number() {
        let csv = "salary,business_expense\n100,0\n100,-5\n";

        match load_from_str(csv) {
            Err(CsvLoadError::NegativeAmount { column, row, .. }) => {
                assert_eq!(column, "business_expense");
                assert_eq!(row, 2);
            }
            other => panic!("expected NegativeAmount, got {other:?}"),
        }
    }

    #[test]
    fn malformed_number_is_a_parse_error() {
        let csv = "salary\nlots\n";

        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    #[test]
    fn negative_count_is_a_parse_error() {
        let csv = "general_dependants\n-1\n";

        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_file(Path::new("/nonexistent/batch.csv"));

        assert!(matches!(result, Err(CsvLoadError::Io { .. })));
    }
}
