use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bracket::NearbyBrackets;

/// One step of the nearby-rate guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateStep {
    /// Change in taxable income needed to reach `rate`.
    pub amount: Decimal,
    /// Marginal rate on the other side of the bracket boundary.
    pub rate: Decimal,
}

/// How far taxable income sits from the neighbouring rate boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateGuidance {
    /// Taxable income the guidance is measured from.
    pub basis_income: Decimal,

    /// Rate tiers surrounding `basis_income`, as `(upper bound, rate)` pairs.
    pub nearby_rates: NearbyBrackets<Decimal>,

    /// Reduction in taxable income that drops into the lower rate.
    /// Absent in the lowest tier.
    pub lower: Option<RateStep>,

    /// Increase in taxable income that moves into the higher rate.
    /// Absent in the open-ended top tier.
    pub higher: Option<RateStep>,
}

/// Every derived figure of one income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Salary plus side-business revenue.
    pub total_earning: Decimal,
    /// Salary deduction plus side-business expenses.
    pub total_expense: Decimal,

    pub salary_deduction: Decimal,
    pub net_salary: Decimal,
    pub net_business_profit: Decimal,
    pub net_income: Decimal,

    pub basic_income_deduction: Decimal,
    pub general_family_dependant_deduction: Decimal,
    pub elder_family_dependant_deduction: Decimal,
    pub specific_dependant_deduction: Decimal,
    pub general_dependant_deduction: Decimal,
    pub other_income_deduction: Decimal,
    /// Sum of every income deduction above.
    pub income_deduction: Decimal,

    /// Net income less income deductions, floored at zero.
    pub taxable_income: Decimal,
    /// `taxable_income` truncated to a multiple of 1,000 yen.
    pub rounded_taxable_income: Decimal,

    pub tax_rate: Decimal,
    pub rate_guidance: RateGuidance,
    pub basic_tax_deduction: Decimal,
    pub other_tax_deduction: Decimal,

    /// Income tax before the reconstruction surcharge.
    pub basic_tax: Decimal,
    /// Reconstruction special income tax (復興特別所得税).
    pub surcharge_tax: Decimal,
    pub total_tax: Decimal,
}
