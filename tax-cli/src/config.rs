//! Loading [`CalculatorConfig`] from a TOML file.

use std::fs;
use std::path::Path;

use tax_core::CalculatorConfig;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Parses a config document. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<CalculatorConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads the config at `path`, or the default config when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig, ConfigLoadError> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(CalculatorConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        path = %path.display(),
        basic_income_deduction = %config.basic_income_deduction,
        nearby_rate_basis = %config.nearby_rate_basis,
        "loaded calculator config"
    );
    Ok(config)
}
