//! Income tax rate lookups (所得税の速算表).

use rust_decimal::Decimal;

use super::schedules::INCOME_TAX_SCHEDULE;
use crate::models::{NearbyBrackets, RateGuidance, RateStep};

/// Marginal rate for a rounded taxable income.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::get_tax_rate;
///
/// assert_eq!(get_tax_rate(dec!(1540000)), dec!(0.05));
/// assert_eq!(get_tax_rate(dec!(1950000)), dec!(0.10));
/// assert_eq!(get_tax_rate(dec!(50000000)), dec!(0.45));
/// ```
pub fn get_tax_rate(taxable_income: Decimal) -> Decimal {
    INCOME_TAX_SCHEDULE.lookup(taxable_income).rate
}

/// Fixed amount subtracted after applying the marginal rate.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::get_basic_tax_deduction;
///
/// assert_eq!(get_basic_tax_deduction(dec!(1540000)), dec!(0));
/// assert_eq!(get_basic_tax_deduction(dec!(5000000)), dec!(427500));
/// ```
pub fn get_basic_tax_deduction(taxable_income: Decimal) -> Decimal {
    INCOME_TAX_SCHEDULE.lookup(taxable_income).basic_tax_deduction
}

/// The `(upper bound, rate)` tier containing `taxable_income` and its
/// neighbours.
///
/// `current.value` always equals [`get_tax_rate`] for the same income.
pub fn get_nearby_tax_rates(taxable_income: Decimal) -> NearbyBrackets<Decimal> {
    INCOME_TAX_SCHEDULE
        .nearby(taxable_income)
        .map(|tier| tier.rate)
}

/// Distance from `income` to the neighbouring rate boundaries.
///
/// Dropping to the lower rate needs a reduction down to the previous
/// tier's bound; reaching the higher rate needs an increase to one yen
/// past the current tier's bound.
pub fn rate_guidance(income: Decimal) -> RateGuidance {
    let nearby_rates = get_nearby_tax_rates(income);

    let lower = nearby_rates.previous.and_then(|previous| {
        previous.upper_bound.map(|bound| RateStep {
            amount: income - bound,
            rate: previous.value,
        })
    });

    let higher = nearby_rates
        .current
        .upper_bound
        .zip(nearby_rates.next)
        .map(|(bound, next)| RateStep {
            amount: bound - income + Decimal::ONE,
            rate: next.value,
        });

    RateGuidance {
        basis_income: income,
        nearby_rates,
        lower,
        higher,
    }
}
