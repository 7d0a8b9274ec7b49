//! Income tax calculation pipeline.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Net salary: salary − salary deduction (minimum 0) |
//! | 2    | Net business profit: revenue − expense (minimum 0) |
//! | 3    | Net income: step 1 + step 2 |
//! | 4    | Income deductions: basic + dependants + other |
//! | 5    | Taxable income: step 3 − step 4 (minimum 0) |
//! | 6    | Rounded taxable income: step 5 truncated to 1,000 yen |
//! | 7    | Rate and basic tax deduction looked up on step 6 |
//! | 8    | Basic tax: step 6 × rate − basic tax deduction − other tax deduction (minimum 0) |
//! | 9    | Surcharge tax: step 8 × 2.1% |
//! | 10   | Total tax: step 8 + step 9 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{TaxCalculator, TaxInputs};
//!
//! let calculator = TaxCalculator::default();
//! let breakdown = calculator.calculate(&TaxInputs::with_salary(dec!(3000000)));
//!
//! assert_eq!(breakdown.net_income, dec!(2020000));
//! assert_eq!(breakdown.rounded_taxable_income, dec!(1540000));
//! assert_eq!(breakdown.basic_tax, dec!(77000));
//! assert_eq!(breakdown.total_tax, dec!(78617));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use super::common::{floor_at_zero, thousand_round};
use super::income_deduction::{
    get_basic_income_deduction, get_elder_family_dependant_deduction,
    get_general_dependant_deduction, get_general_family_dependant_deduction,
    get_specific_dependant_deduction,
};
use super::salary_deduction::get_salary_deduction;
use super::schedules::SURCHARGE_RATE;
use super::tax_rate::{get_basic_tax_deduction, get_tax_rate, rate_guidance};
use crate::models::{CalculatorConfig, NearbyRateBasis, TaxBreakdown, TaxInputs};

/// Income deduction components for one calculation.
struct IncomeDeductions {
    basic: Decimal,
    general_family: Decimal,
    elder_family: Decimal,
    specific: Decimal,
    general: Decimal,
    other: Decimal,
}

impl IncomeDeductions {
    fn total(&self) -> Decimal {
        self.basic + self.general_family + self.elder_family + self.specific + self.general + self.other
    }
}

/// Computes a [`TaxBreakdown`] from [`TaxInputs`].
///
/// The calculator holds only its configuration; every call to
/// [`TaxCalculator::calculate`] is an independent pure evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxCalculator {
    config: CalculatorConfig,
}

impl TaxCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Runs the full pipeline.
    ///
    /// Negative amounts in `input` are treated as zero.
    pub fn calculate(
        &self,
        input: &TaxInputs,
    ) -> TaxBreakdown {
        let input = input.normalized();

        let salary_deduction = get_salary_deduction(input.salary);
        let net_salary = floor_at_zero(input.salary - salary_deduction);
        let net_business_profit = floor_at_zero(input.business_revenue - input.business_expense);
        let net_income = net_salary + net_business_profit;

        let deductions = self.income_deductions(&input, net_income);
        let income_deduction = deductions.total();

        let taxable_income = floor_at_zero(net_income - income_deduction);
        let rounded_taxable_income = thousand_round(taxable_income);

        let tax_rate = get_tax_rate(rounded_taxable_income);
        let basic_tax_deduction = get_basic_tax_deduction(rounded_taxable_income);
        let guidance = rate_guidance(match self.config.nearby_rate_basis {
            NearbyRateBasis::Rounded => rounded_taxable_income,
            NearbyRateBasis::Unrounded => taxable_income,
        });

        let basic_tax = floor_at_zero(
            rounded_taxable_income * tax_rate - basic_tax_deduction - input.other_tax_deduction,
        );
        let surcharge_tax = basic_tax * SURCHARGE_RATE;
        let total_tax = basic_tax + surcharge_tax;

        debug!(
            %net_income,
            %income_deduction,
            %rounded_taxable_income,
            %tax_rate,
            %total_tax,
            "calculated income tax"
        );

        TaxBreakdown {
            total_earning: input.salary + input.business_revenue,
            total_expense: salary_deduction + input.business_expense,
            salary_deduction,
            net_salary,
            net_business_profit,
            net_income,
            basic_income_deduction: deductions.basic,
            general_family_dependant_deduction: deductions.general_family,
            elder_family_dependant_deduction: deductions.elder_family,
            specific_dependant_deduction: deductions.specific,
            general_dependant_deduction: deductions.general,
            other_income_deduction: deductions.other,
            income_deduction,
            taxable_income,
            rounded_taxable_income,
            tax_rate,
            rate_guidance: guidance,
            basic_tax_deduction,
            other_tax_deduction: input.other_tax_deduction,
            basic_tax,
            surcharge_tax,
            total_tax,
        }
    }

    fn income_deductions(
        &self,
        input: &TaxInputs,
        net_income: Decimal,
    ) -> IncomeDeductions {
        IncomeDeductions {
            basic: get_basic_income_deduction(self.config.basic_income_deduction, net_income),
            general_family: get_general_family_dependant_deduction(
                input.general_family_dependants,
                net_income,
            ),
            elder_family: get_elder_family_dependant_deduction(
                input.elder_family_dependants,
                net_income,
            ),
            specific: get_specific_dependant_deduction(input.specific_dependants),
            general: get_general_dependant_deduction(input.general_dependants),
            other: input.other_income_deduction,
        }
    }
}
