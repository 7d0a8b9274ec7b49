//! Japanese personal income tax calculations.
//!
//! This module provides the deduction schedules, the bracket lookups built on
//! them, and the [`TaxCalculator`] pipeline that chains them into a final
//! tax figure.

pub mod calculator;
pub mod common;
pub mod income_deduction;
pub mod salary_deduction;
pub mod schedules;
pub mod tax_rate;

pub use calculator::TaxCalculator;
pub use income_deduction::{
    get_basic_income_deduction, get_elder_family_dependant_deduction,
    get_general_dependant_deduction, get_general_family_dependant_deduction,
    get_specific_dependant_deduction,
};
pub use salary_deduction::get_salary_deduction;
pub use tax_rate::{get_basic_tax_deduction, get_nearby_tax_rates, get_tax_rate, rate_guidance};
