//! Input form state for the tax calculator.
//!
//! This module holds the raw text of every input field and mirrors it into
//! an [`InputStore`] so the form survives between sessions. The calculator
//! only ever sees the sanitized [`TaxInputs`] built from this text.

use std::collections::BTreeMap;

use clap::ValueEnum;
use tax_core::{InputStore, TaxBreakdown, TaxCalculator, TaxInputs};
use tracing::{debug, error, warn};

use crate::utils::{parse_amount, parse_count};

/// An editable field of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum InputField {
    Salary,
    BusinessRevenue,
    BusinessExpense,
    GeneralFamilyDependants,
    ElderFamilyDependants,
    SpecificDependants,
    GeneralDependants,
    OtherIncomeDeduction,
    OtherTaxDeduction,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[
            InputField::Salary,
            InputField::BusinessRevenue,
            InputField::BusinessExpense,
            InputField::GeneralFamilyDependants,
            InputField::ElderFamilyDependants,
            InputField::SpecificDependants,
            InputField::GeneralDependants,
            InputField::OtherIncomeDeduction,
            InputField::OtherTaxDeduction,
        ]
    }

    /// Key under which the raw text is stored.
    pub fn storage_key(&self) -> &'static str {
        match self {
            InputField::Salary => "salary",
            InputField::BusinessRevenue => "businessRevenue",
            InputField::BusinessExpense => "businessCost",
            InputField::GeneralFamilyDependants => "generalFamilyDependantCount",
            InputField::ElderFamilyDependants => "elderFamilyDependantCount",
            InputField::SpecificDependants => "studentDependantCount",
            InputField::GeneralDependants => "generalDependantCount",
            InputField::OtherIncomeDeduction => "otherIncomeDeduction",
            InputField::OtherTaxDeduction => "otherTaxDeduction",
        }
    }

    /// Text shown when nothing has been stored yet.
    pub fn default_text(&self) -> &'static str {
        match self {
            InputField::Salary => "3,000,000",
            _ => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::Salary => "Salary (給与)",
            InputField::BusinessRevenue => "Side-business revenue (事業収入)",
            InputField::BusinessExpense => "Side-business expenses (必要経費)",
            InputField::GeneralFamilyDependants => "Spouses under 70 (控除対象配偶者)",
            InputField::ElderFamilyDependants => "Spouses 70 or over (老人控除対象配偶者)",
            InputField::SpecificDependants => "Dependants aged 19-22 (特定扶養親族)",
            InputField::GeneralDependants => "Other dependants (一般扶養親族)",
            InputField::OtherIncomeDeduction => "Other income deductions (所得控除)",
            InputField::OtherTaxDeduction => "Tax credits (税額控除)",
        }
    }
}

/// Raw form text bound to a persistent store.
///
/// Store failures never interrupt the form: a failed read falls back to the
/// field's default text and a failed write keeps the new text in memory.
pub struct InputForm<S: InputStore> {
    store: S,
    values: BTreeMap<InputField, String>,
}

impl<S: InputStore> InputForm<S> {
    /// Loads every field from `store`.
    pub fn load(store: S) -> Self {
        let values = InputField::all()
            .iter()
            .map(|&field| (field, Self::read_field(&store, field)))
            .collect();

        Self { store, values }
    }

    fn read_field(
        store: &S,
        field: InputField,
    ) -> String {
        match store.get(field.storage_key()) {
            Ok(Some(text)) => text,
            Ok(None) => field.default_text().to_string(),
            Err(error) => {
                error!(key = field.storage_key(), %error, "failed to read stored input");
                field.default_text().to_string()
            }
        }
    }

    /// Current raw text of `field`.
    pub fn text(
        &self,
        field: InputField,
    ) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.default_text())
    }

    /// Updates `field` and writes it through to the store.
    ///
    /// Returns whether the value reached the store.
    pub fn set(
        &mut self,
        field: InputField,
        text: &str,
    ) -> bool {
        self.values.insert(field, text.to_string());

        match self.store.set(field.storage_key(), text) {
            Ok(()) => {
                debug!(key = field.storage_key(), value = %text, "stored input");
                true
            }
            Err(error) => {
                warn!(key = field.storage_key(), %error, "failed to store input, keeping it in memory");
                false
            }
        }
    }

    /// Restores every field to its default text.
    ///
    /// Returns whether every value reached the store.
    pub fn reset(&mut self) -> bool {
        InputField::all()
            .iter()
            .fold(true, |ok, &field| self.set(field, field.default_text()) && ok)
    }

    /// Sanitized inputs for the calculator.
    pub fn inputs(&self) -> TaxInputs {
        TaxInputs {
            salary: parse_amount(self.text(InputField::Salary)),
            business_revenue: parse_amount(self.text(InputField::BusinessRevenue)),
            business_expense: parse_amount(self.text(InputField::BusinessExpense)),
            general_family_dependants: parse_count(self.text(InputField::GeneralFamilyDependants)),
            elder_family_dependants: parse_count(self.text(InputField::ElderFamilyDependants)),
            specific_dependants: parse_count(self.text(InputField::SpecificDependants)),
            general_dependants: parse_count(self.text(InputField::GeneralDependants)),
            other_income_deduction: parse_amount(self.text(InputField::OtherIncomeDeduction)),
            other_tax_deduction: parse_amount(self.text(InputField::OtherTaxDeduction)),
        }
    }

    /// Recomputes the breakdown from the current text.
    pub fn breakdown(
        &self,
        calculator: &TaxCalculator,
    ) -> TaxBreakdown {
        calculator.calculate(&self.inputs())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
