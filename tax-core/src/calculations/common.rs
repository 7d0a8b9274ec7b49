//! Common utility functions for tax calculations.
//!
//! This module provides the rounding and clamping helpers shared by the
//! deduction schedules and the calculation pipeline.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const THOUSAND: Decimal = dec!(1000);

/// Returns `value`, or zero when `value` is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(1500)), dec!(1500));
/// assert_eq!(floor_at_zero(dec!(-1500)), dec!(0));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Truncates a value to a multiple of 1,000 yen (1,000円未満切り捨て).
///
/// The fractional part is dropped toward zero, never rounded to nearest.
/// Applied exactly once to taxable income, before the rate lookup.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::thousand_round;
///
/// assert_eq!(thousand_round(dec!(1999)), dec!(1000));
/// assert_eq!(thousand_round(dec!(2000)), dec!(2000));
/// assert_eq!(thousand_round(dec!(999.99)), dec!(0));
/// ```
pub fn thousand_round(value: Decimal) -> Decimal {
    (value / THOUSAND).trunc() * THOUSAND
}

/// Rounds a yen amount to whole yen, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_yen;
///
/// assert_eq!(round_to_yen(dec!(1616.4)), dec!(1616));
/// assert_eq!(round_to_yen(dec!(1616.5)), dec!(1617));
/// ```
pub fn round_to_yen(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
