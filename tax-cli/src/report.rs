//! Plain-text rendering of calculation results.

use std::fmt;

use rust_decimal::Decimal;
use tax_core::calculations::schedules::{INCOME_TAX_SCHEDULE, SURCHARGE_RATE};
use tax_core::{CalculatorConfig, TaxBreakdown, TaxInputs};

use crate::csv_loader::Scenario;
use crate::utils::{format_rate, format_yen};

const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 16;

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(
        f,
        "  {label:<lw$}{value:>aw$}",
        lw = LABEL_WIDTH,
        aw = AMOUNT_WIDTH
    )
}

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    row(f, label, &format_yen(amount))
}

/// The full breakdown, section by section.
pub struct BreakdownReport<'a> {
    pub inputs: &'a TaxInputs,
    pub breakdown: &'a TaxBreakdown,
    pub config: &'a CalculatorConfig,
}

impl fmt::Display for BreakdownReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let inputs = self.inputs;
        let breakdown = self.breakdown;

        writeln!(f, "Earnings")?;
        line(f, "Salary", inputs.salary)?;
        line(f, "Salary deduction", breakdown.salary_deduction)?;
        line(f, "Net salary", breakdown.net_salary)?;
        line(f, "Side-business revenue", inputs.business_revenue)?;
        line(f, "Side-business expenses", inputs.business_expense)?;
        line(f, "Net business profit", breakdown.net_business_profit)?;
        line(f, "Total earning", breakdown.total_earning)?;
        line(f, "Total expense", breakdown.total_expense)?;
        line(f, "Net income", breakdown.net_income)?;

        writeln!(f, "\nIncome deductions")?;
        line(
            f,
            &format!("Basic deduction ({})", self.config.basic_income_deduction),
            breakdown.basic_income_deduction,
        )?;
        line(
            f,
            &format!("Spouses under 70 ×{}", inputs.general_family_dependants),
            breakdown.general_family_dependant_deduction,
        )?;
        line(
            f,
            &format!("Spouses 70 or over ×{}", inputs.elder_family_dependants),
            breakdown.elder_family_dependant_deduction,
        )?;
        line(
            f,
            &format!("Dependants aged 19-22 ×{}", inputs.specific_dependants),
            breakdown.specific_dependant_deduction,
        )?;
        line(
            f,
            &format!("Other dependants ×{}", inputs.general_dependants),
            breakdown.general_dependant_deduction,
        )?;
        line(f, "Other income deductions", breakdown.other_income_deduction)?;
        line(f, "Total income deductions", breakdown.income_deduction)?;

        writeln!(f, "\nTax")?;
        line(f, "Taxable income", breakdown.taxable_income)?;
        line(f, "Taxable income (1,000 yen units)", breakdown.rounded_taxable_income)?;
        row(f, "Tax rate", &format_rate(breakdown.tax_rate))?;
        line(f, "Basic tax deduction", breakdown.basic_tax_deduction)?;
        line(f, "Tax credits", breakdown.other_tax_deduction)?;
        line(f, "Basic tax", breakdown.basic_tax)?;
        line(
            f,
            &format!("Reconstruction surcharge ({})", format_rate(SURCHARGE_RATE)),
            breakdown.surcharge_tax,
        )?;
        line(f, "Total tax", breakdown.total_tax)?;

        let guidance = &breakdown.rate_guidance;
        if guidance.lower.is_some() || guidance.higher.is_some() {
            writeln!(f)?;
        }
        if let Some(step) = guidance.lower {
            writeln!(
                f,
                "Reduce taxable income by at least {} to lower the rate from {} to {}.",
                format_yen(step.amount),
                format_rate(breakdown.tax_rate),
                format_rate(step.rate)
            )?;
        }
        if let Some(step) = guidance.higher {
            writeln!(
                f,
                "An increase of {} in taxable income raises the rate from {} to {}.",
                format_yen(step.amount),
                format_rate(breakdown.tax_rate),
                format_rate(step.rate)
            )?;
        }

        Ok(())
    }
}

/// The progressive rate schedule as a table.
pub struct RateScheduleReport;

impl fmt::Display for RateScheduleReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:>20}  {:>20}  {:>6}  {:>16}",
            "From", "To", "Rate", "Deduction"
        )?;

        let mut from = Decimal::ZERO;
        for bracket in INCOME_TAX_SCHEDULE.brackets() {
            let to = bracket
                .upper_bound
                .map(format_yen)
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:>20}  {:>20}  {:>6}  {:>16}",
                format_yen(from),
                to,
                format_rate(bracket.value.rate),
                format_yen(bracket.value.basic_tax_deduction)
            )?;
            if let Some(bound) = bracket.upper_bound {
                from = bound + Decimal::ONE;
            }
        }

        Ok(())
    }
}

/// One summary row per batch scenario.
pub struct BatchReport<'a>(pub &'a [(Scenario, TaxBreakdown)]);

impl fmt::Display for BatchReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<20}  {:>16}  {:>16}  {:>6}  {:>16}",
            "Scenario", "Net income", "Taxable", "Rate", "Total tax"
        )?;

        for (index, (scenario, breakdown)) in self.0.iter().enumerate() {
            let label = scenario
                .label
                .clone()
                .unwrap_or_else(|| format!("#{}", index + 1));
            writeln!(
                f,
                "{:<20}  {:>16}  {:>16}  {:>6}  {:>16}",
                label,
                format_yen(breakdown.net_income),
                format_yen(breakdown.rounded_taxable_income),
                format_rate(breakdown.tax_rate),
                format_yen(breakdown.total_tax)
            )?;
        }

        Ok(())
    }
}

pub fn render_breakdown(
    inputs: &TaxInputs,
    breakdown: &TaxBreakdown,
    config: &CalculatorConfig,
) -> String {
    BreakdownReport {
        inputs,
        breakdown,
        config,
    }
    .to_string()
}

pub fn render_rate_schedule() -> String {
    RateScheduleReport.to_string()
}

pub fn render_batch(results: &[(Scenario, TaxBreakdown)]) -> String {
    BatchReport(results).to_string()
}
