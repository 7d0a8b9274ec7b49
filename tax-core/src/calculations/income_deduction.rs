//! Income deductions (所得控除) keyed on net income.

use rust_decimal::Decimal;

use super::schedules::{
    BASIC_INCOME_DEDUCTION_2020, ELDER_FAMILY_DEPENDANT_DEDUCTION,
    FLAT_BASIC_INCOME_DEDUCTION_2019, GENERAL_DEPENDANT_DEDUCTION,
    GENERAL_FAMILY_DEPENDANT_DEDUCTION, SPECIFIC_DEPENDANT_DEDUCTION,
};
use crate::models::BasicIncomeDeductionPolicy;

/// Returns the basic income deduction under `policy`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::BasicIncomeDeductionPolicy;
/// use tax_core::calculations::get_basic_income_deduction;
///
/// let flat = BasicIncomeDeductionPolicy::Flat2019;
/// let tiered = BasicIncomeDeductionPolicy::Tiered2020;
///
/// assert_eq!(get_basic_income_deduction(flat, dec!(30000000)), dec!(380000));
/// assert_eq!(get_basic_income_deduction(tiered, dec!(2020000)), dec!(480000));
/// assert_eq!(get_basic_income_deduction(tiered, dec!(30000000)), dec!(0));
/// ```
pub fn get_basic_income_deduction(
    policy: BasicIncomeDeductionPolicy,
    net_income: Decimal,
) -> Decimal {
    match policy {
        BasicIncomeDeductionPolicy::Flat2019 => FLAT_BASIC_INCOME_DEDUCTION_2019,
        BasicIncomeDeductionPolicy::Tiered2020 => BASIC_INCOME_DEDUCTION_2020.lookup(net_income),
    }
}

/// Spouse deduction for `count` qualifying spouses under 70.
pub fn get_general_family_dependant_deduction(
    count: u32,
    net_income: Decimal,
) -> Decimal {
    Decimal::from(count) * GENERAL_FAMILY_DEPENDANT_DEDUCTION.lookup(net_income)
}

/// Spouse deduction for `count` qualifying spouses aged 70 or over.
pub fn get_elder_family_dependant_deduction(
    count: u32,
    net_income: Decimal,
) -> Decimal {
    Decimal::from(count) * ELDER_FAMILY_DEPENDANT_DEDUCTION.lookup(net_income)
}

/// Dependant deduction for `count` dependants aged 19 to 22.
pub fn get_specific_dependant_deduction(count: u32) -> Decimal {
    Decimal::from(count) * SPECIFIC_DEPENDANT_DEDUCTION
}

/// Dependant deduction for `count` other dependants.
pub fn get_general_dependant_deduction(count: u32) -> Decimal {
    Decimal::from(count) * GENERAL_DEPENDANT_DEDUCTION
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // basic income deduction tests
    // =========================================================================

    #[test]
    fn flat_policy_ignores_income() {
        for income in [dec!(0), dec!(2020000), dec!(24000001), dec!(90000000)] {
            assert_eq!(
                get_basic_income_deduction(BasicIncomeDeductionPolicy::Flat2019, income),
                dec!(380000)
            );
        }
    }

    #[test]
    fn tiered_policy_tapers_with_income() {
        let policy = BasicIncomeDeductionPolicy::Tiered2020;

        assert_eq!(get_basic_income_deduction(policy, dec!(24000000)), dec!(480000));
        assert_eq!(get_basic_income_deduction(policy, dec!(24000001)), dec!(320000));
        assert_eq!(get_basic_income_deduction(policy, dec!(24500000)), dec!(320000));
        assert_eq!(get_basic_income_deduction(policy, dec!(24500001)), dec!(160000));
        assert_eq!(get_basic_income_deduction(policy, dec!(25000000)), dec!(160000));
        assert_eq!(get_basic_income_deduction(policy, dec!(25000001)), Decimal::ZERO);
    }

    // =========================================================================
    // family dependant tests
    // =========================================================================

    #[test]
    fn general_family_deduction_by_income_tier() {
        assert_eq!(get_general_family_dependant_deduction(1, dec!(9000000)), dec!(380000));
        assert_eq!(get_general_family_dependant_deduction(1, dec!(9000001)), dec!(260000));
        assert_eq!(get_general_family_dependant_deduction(1, dec!(9500000)), dec!(260000));
        assert_eq!(get_general_family_dependant_deduction(1, dec!(9500001)), dec!(130000));
    }

    #[test]
    fn elder_family_deduction_by_income_tier() {
        assert_eq!(get_elder_family_dependant_deduction(1, dec!(5000000)), dec!(480000));
        assert_eq!(get_elder_family_dependant_deduction(1, dec!(9200000)), dec!(320000));
        assert_eq!(get_elder_family_dependant_deduction(1, dec!(12000000)), dec!(160000));
    }

    #[test]
    fn family_deductions_are_zero_without_dependants() {
        assert_eq!(get_general_family_dependant_deduction(0, dec!(1)), Decimal::ZERO);
        assert_eq!(get_elder_family_dependant_deduction(0, dec!(1)), Decimal::ZERO);
    }

    // =========================================================================
    // flat dependant tests
    // =========================================================================

    #[test]
    fn specific_dependant_deduction_is_per_person() {
        assert_eq!(get_specific_dependant_deduction(2), dec!(1260000));
    }

    #[test]
    fn general_dependant_deduction_is_per_person() {
        assert_eq!(get_general_dependant_deduction(3), dec!(1140000));
    }

    proptest! {
        #[test]
        fn prop_general_family_deduction_scales_with_count(
            count in 0u32..20,
            income in 0i64..30_000_000,
        ) {
            let income = Decimal::from(income);
            let per_person = if income <= dec!(9000000) {
                dec!(380000)
            } else if income <= dec!(9500000) {
                dec!(260000)
            } else {
                dec!(130000)
            };

            prop_assert_eq!(
                get_general_family_dependant_deduction(count, income),
                Decimal::from(count) * per_person
            );
        }

        #[test]
        fn prop_elder_deduction_exceeds_general_deduction(
            count in 1u32..20,
            income in 0i64..30_000_000,
        ) {
            let income = Decimal::from(income);

            prop_assert!(
                get_elder_family_dependant_deduction(count, income)
                    > get_general_family_dependant_deduction(count, income)
            );
        }
    }
}
