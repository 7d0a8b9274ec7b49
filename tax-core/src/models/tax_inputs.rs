use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User-editable values feeding the income tax calculation.
///
/// Amounts are whole yen and counts are numbers of people. Every field
/// defaults to zero, so partially filled inputs deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInputs {
    /// Gross salary including bonuses (給与収入).
    pub salary: Decimal,

    /// Side-business revenue (事業収入).
    pub business_revenue: Decimal,

    /// Side-business expenses (必要経費).
    pub business_expense: Decimal,

    /// Qualifying spouses under 70 (控除対象配偶者).
    pub general_family_dependants: u32,

    /// Qualifying spouses aged 70 or over (老人控除対象配偶者).
    pub elder_family_dependants: u32,

    /// Dependants aged 19 to 22 (特定扶養親族).
    pub specific_dependants: u32,

    /// Other dependants aged 16 or over (一般の控除対象扶養親族).
    pub general_dependants: u32,

    /// Any further income deductions such as social insurance premiums.
    pub other_income_deduction: Decimal,

    /// Tax credits subtracted from the computed tax (税額控除).
    pub other_tax_deduction: Decimal,
}

impl TaxInputs {
    /// Inputs with only a salary set.
    pub fn with_salary(salary: Decimal) -> Self {
        Self {
            salary,
            ..Default::default()
        }
    }

    /// Returns a copy with every negative amount replaced by zero.
    pub fn normalized(&self) -> Self {
        Self {
            salary: self.salary.max(Decimal::ZERO),
            business_revenue: self.business_revenue.max(Decimal::ZERO),
            business_expense: self.business_expense.max(Decimal::ZERO),
            other_income_deduction: self.other_income_deduction.max(Decimal::ZERO),
            other_tax_deduction: self.other_tax_deduction.max(Decimal::ZERO),
            ..self.clone()
        }
    }
}
