mod bracket;
mod calculator_config;
mod tax_breakdown;
mod tax_inputs;

pub use bracket::{Bracket, BracketTable, NearbyBrackets};
pub use calculator_config::{
    BasicIncomeDeductionPolicy, CalculatorConfig, ConfigError, NearbyRateBasis,
};
pub use tax_breakdown::{RateGuidance, RateStep, TaxBreakdown};
pub use tax_inputs::TaxInputs;
