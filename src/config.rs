//! Summary configuration

use sample_io::ReaderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a [`SummaryConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("quantile probability {0} must be in [0, 1]")]
    InvalidProbability(f64),

    #[error("moment order {0} exceeds {max}", max = i32::MAX)]
    InvalidOrder(u32),
}

/// Which statistics [`crate::summarize`] reports and how samples are read
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Probabilities for the nearest-rank quantiles
    pub quantiles: Vec<f64>,
    /// Orders of the central moments about the mean
    pub moment_orders: Vec<u32>,
    pub reader: ReaderConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            quantiles: vec![0.25, 0.5, 0.75],
            moment_orders: vec![2, 3, 4],
            reader: ReaderConfig::default(),
        }
    }
}

impl SummaryConfig {
    /// Check every probability and moment order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(&p) = self.quantiles.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(ConfigError::InvalidProbability(p));
        }
        if let Some(&k) = self
            .moment_orders
            .iter()
            .find(|&&k| i32::try_from(k).is_err())
        {
            return Err(ConfigError::InvalidOrder(k));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}
