//! Employment income deduction (給与所得控除).
//!
//! | Salary up to | Deduction |
//! |--------------|-----------|
//! | 1,625,000    | 550,000 |
//! | 1,800,000    | salary × 40% − 100,000 |
//! | 3,600,000    | salary × 30% + 80,000 |
//! | 6,600,000    | salary × 20% + 440,000 |
//! | 8,500,000    | salary × 10% + 1,100,000 |
//! | above        | 1,950,000 |

use rust_decimal::Decimal;

use super::schedules::SALARY_DEDUCTION;

/// Returns the salary deduction for a gross salary.
///
/// The schedule is continuous at every tier boundary, so the deduction never
/// jumps as salary crosses a bound.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::get_salary_deduction;
///
/// assert_eq!(get_salary_deduction(dec!(1000000)), dec!(550000));
/// assert_eq!(get_salary_deduction(dec!(3000000)), dec!(980000));
/// assert_eq!(get_salary_deduction(dec!(20000000)), dec!(1950000));
/// ```
pub fn get_salary_deduction(earning: Decimal) -> Decimal {
    SALARY_DEDUCTION.lookup(earning).apply(earning)
}
