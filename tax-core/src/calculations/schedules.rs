//! National Tax Agency schedules embedded as static bracket tables.
//!
//! | Table | Keyed on | Source |
//! |-------|----------|--------|
//! | [`SALARY_DEDUCTION`] | gross salary | No.1410 給与所得控除 |
//! | [`BASIC_INCOME_DEDUCTION_2020`] | net income | No.1199 基礎控除 |
//! | [`GENERAL_FAMILY_DEPENDANT_DEDUCTION`] | net income | No.1191 配偶者控除 |
//! | [`ELDER_FAMILY_DEPENDANT_DEDUCTION`] | net income | No.1191 配偶者控除 |
//! | [`INCOME_TAX_SCHEDULE`] | rounded taxable income | No.2260 所得税の税率 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{Bracket, BracketTable};

/// A salary deduction tier: `earning × rate + offset`.
///
/// Flat tiers have a zero rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearTier {
    pub rate: Decimal,
    pub offset: Decimal,
}

impl LinearTier {
    pub const fn flat(amount: Decimal) -> Self {
        Self {
            rate: Decimal::ZERO,
            offset: amount,
        }
    }

    pub const fn linear(
        rate: Decimal,
        offset: Decimal,
    ) -> Self {
        Self { rate, offset }
    }

    pub fn apply(
        &self,
        earning: Decimal,
    ) -> Decimal {
        earning * self.rate + self.offset
    }
}

/// A tier of the progressive income tax schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Marginal rate applied to the whole taxable income.
    pub rate: Decimal,
    /// Amount subtracted after applying `rate` (控除額).
    pub basic_tax_deduction: Decimal,
}

impl RateTier {
    const fn new(
        rate: Decimal,
        basic_tax_deduction: Decimal,
    ) -> Self {
        Self {
            rate,
            basic_tax_deduction,
        }
    }
}

const SALARY_DEDUCTION_BRACKETS: &[Bracket<LinearTier>] = &[
    Bracket::bounded(dec!(1625000), LinearTier::flat(dec!(550000))),
    Bracket::bounded(dec!(1800000), LinearTier::linear(dec!(0.40), dec!(-100000))),
    Bracket::bounded(dec!(3600000), LinearTier::linear(dec!(0.30), dec!(80000))),
    Bracket::bounded(dec!(6600000), LinearTier::linear(dec!(0.20), dec!(440000))),
    Bracket::bounded(dec!(8500000), LinearTier::linear(dec!(0.10), dec!(1100000))),
    Bracket::open(LinearTier::flat(dec!(1950000))),
];

pub const SALARY_DEDUCTION: BracketTable<LinearTier> =
    BracketTable::new(SALARY_DEDUCTION_BRACKETS);

/// Basic income deduction before the 2020 reform.
pub const FLAT_BASIC_INCOME_DEDUCTION_2019: Decimal = dec!(380000);

const BASIC_INCOME_DEDUCTION_2020_BRACKETS: &[Bracket<Decimal>] = &[
    Bracket::bounded(dec!(24000000), dec!(480000)),
    Bracket::bounded(dec!(24500000), dec!(320000)),
    Bracket::bounded(dec!(25000000), dec!(160000)),
    Bracket::open(Decimal::ZERO),
];

pub const BASIC_INCOME_DEDUCTION_2020: BracketTable<Decimal> =
    BracketTable::new(BASIC_INCOME_DEDUCTION_2020_BRACKETS);

const GENERAL_FAMILY_DEPENDANT_BRACKETS: &[Bracket<Decimal>] = &[
    Bracket::bounded(dec!(9000000), dec!(380000)),
    Bracket::bounded(dec!(9500000), dec!(260000)),
    Bracket::open(dec!(130000)),
];

/// Per-person deduction for a qualifying spouse under 70.
pub const GENERAL_FAMILY_DEPENDANT_DEDUCTION: BracketTable<Decimal> =
    BracketTable::new(GENERAL_FAMILY_DEPENDANT_BRACKETS);

const ELDER_FAMILY_DEPENDANT_BRACKETS: &[Bracket<Decimal>] = &[
    Bracket::bounded(dec!(9000000), dec!(480000)),
    Bracket::bounded(dec!(9500000), dec!(320000)),
    Bracket::open(dec!(160000)),
];

/// Per-person deduction for a qualifying spouse aged 70 or over.
pub const ELDER_FAMILY_DEPENDANT_DEDUCTION: BracketTable<Decimal> =
    BracketTable::new(ELDER_FAMILY_DEPENDANT_BRACKETS);

/// Per-person deduction for a dependant aged 19 to 22 (特定扶養親族).
pub const SPECIFIC_DEPENDANT_DEDUCTION: Decimal = dec!(630000);

/// Per-person deduction for any other dependant aged 16 or over.
pub const GENERAL_DEPENDANT_DEDUCTION: Decimal = dec!(380000);

const INCOME_TAX_BRACKETS: &[Bracket<RateTier>] = &[
    Bracket::bounded(dec!(1949000), RateTier::new(dec!(0.05), dec!(0))),
    Bracket::bounded(dec!(3299000), RateTier::new(dec!(0.10), dec!(97500))),
    Bracket::bounded(dec!(6949000), RateTier::new(dec!(0.20), dec!(427500))),
    Bracket::bounded(dec!(8999000), RateTier::new(dec!(0.23), dec!(636000))),
    Bracket::bounded(dec!(17999000), RateTier::new(dec!(0.33), dec!(1536000))),
    Bracket::bounded(dec!(39999000), RateTier::new(dec!(0.40), dec!(2796000))),
    Bracket::open(RateTier::new(dec!(0.45), dec!(4796000))),
];

pub const INCOME_TAX_SCHEDULE: BracketTable<RateTier> = BracketTable::new(INCOME_TAX_BRACKETS);

/// Reconstruction special income tax rate (復興特別所得税, 2013–2037).
pub const SURCHARGE_RATE: Decimal = dec!(0.021);
