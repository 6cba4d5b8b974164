//! Engine configuration.
//!
//! Tunables for the stores, loadable from TOML. Every field is optional in
//! the file and falls back to its default.
//!
//! ```
//! use smekit_core::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     knapsack_capacity_limit = 50000
//!     duplicate_max_distance = 1
//! "#).unwrap();
//!
//! assert_eq!(config.knapsack_capacity_limit, 50_000);
//! assert_eq!(config.low_stock_alert_limit, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::finance::{BudgetSelector, CAPACITY_CEILING, DEFAULT_MAX_CAPACITY};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Clamp for the knapsack capacity (whole currency units).
    /// Must lie in `1..=CAPACITY_CEILING`.
    pub knapsack_capacity_limit: usize,

    /// How many low-stock products a default alert query returns.
    pub low_stock_alert_limit: usize,

    /// Edit distance at or below which two leads count as duplicates.
    pub duplicate_max_distance: usize,

    /// How many finance items the upcoming view shows.
    pub upcoming_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            knapsack_capacity_limit: DEFAULT_MAX_CAPACITY,
            low_stock_alert_limit: 5,
            duplicate_max_distance: 2,
            upcoming_limit: 10,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.knapsack_capacity_limit == 0 {
            return Err(ConfigError::Invalid(
                "knapsack_capacity_limit must be greater than zero".to_string(),
            ));
        }
        if self.knapsack_capacity_limit > CAPACITY_CEILING {
            return Err(ConfigError::Invalid(format!(
                "knapsack_capacity_limit must not exceed {CAPACITY_CEILING}"
            )));
        }
        Ok(())
    }

    pub fn with_knapsack_capacity_limit(mut self, limit: usize) -> Self {
        self.knapsack_capacity_limit = limit;
        self
    }

    pub fn with_duplicate_max_distance(mut self, distance: usize) -> Self {
        self.duplicate_max_distance = distance;
        self
    }

    pub fn budget_selector(&self) -> BudgetSelector {
        BudgetSelector::new(self.knapsack_capacity_limit)
    }
}
