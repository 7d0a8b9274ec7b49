use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing calculator configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown basic income deduction policy '{0}' (expected flat-2019 or tiered-2020)")]
    UnknownBasicIncomeDeductionPolicy(String),

    #[error("unknown nearby rate basis '{0}' (expected rounded or unrounded)")]
    UnknownNearbyRateBasis(String),
}

/// How the basic income deduction (基礎控除) is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicIncomeDeductionPolicy {
    /// 380,000 yen regardless of income.
    #[serde(rename = "flat-2019")]
    Flat2019,

    /// 480,000 yen, tapering to zero for net income above 24,000,000 yen.
    #[default]
    #[serde(rename = "tiered-2020")]
    Tiered2020,
}

impl BasicIncomeDeductionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat2019 => "flat-2019",
            Self::Tiered2020 => "tiered-2020",
        }
    }
}

impl FromStr for BasicIncomeDeductionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "flat-2019" => Ok(Self::Flat2019),
            "tiered-2020" => Ok(Self::Tiered2020),
            other => Err(ConfigError::UnknownBasicIncomeDeductionPolicy(
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for BasicIncomeDeductionPolicy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which taxable income figure the nearby-rate guidance is measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NearbyRateBasis {
    /// Taxable income after truncation to 1,000 yen.
    #[default]
    Rounded,

    /// Taxable income before truncation.
    Unrounded,
}

impl NearbyRateBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Unrounded => "unrounded",
        }
    }
}

impl FromStr for NearbyRateBasis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rounded" => Ok(Self::Rounded),
            "unrounded" => Ok(Self::Unrounded),
            other => Err(ConfigError::UnknownNearbyRateBasis(other.to_string())),
        }
    }
}

impl fmt::Display for NearbyRateBasis {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options fixed once when a [`crate::TaxCalculator`] is built.
///
/// Serialized with kebab-case keys and values, e.g.
/// `basic-income-deduction = "flat-2019"`. Missing keys take their defaults.
///
/// ```
/// use tax_core::{BasicIncomeDeductionPolicy, CalculatorConfig, NearbyRateBasis};
///
/// let config = CalculatorConfig {
///     basic_income_deduction: "flat-2019".parse().unwrap(),
///     ..Default::default()
/// };
///
/// assert_eq!(config.basic_income_deduction, BasicIncomeDeductionPolicy::Flat2019);
/// assert_eq!(config.nearby_rate_basis, NearbyRateBasis::Rounded);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub basic_income_deduction: BasicIncomeDeductionPolicy,
    pub nearby_rate_basis: NearbyRateBasis,
}
