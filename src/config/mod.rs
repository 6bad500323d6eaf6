#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use toml_config::{LOG_LEVELS, MAX_PRECISION};

pub const DEFAULT_PRECISION: usize = 2;

/// Configuration after layering every source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub precision: usize,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            log_level: None,
        }
    }
}

impl Settings {
    /// Takes each value from the first layer that sets it. Layers are ordered
    /// highest priority first.
    pub fn resolve(layers: &[&dyn ConfigProvider]) -> Self {
        let precision = layers
            .iter()
            .find_map(|layer| layer.precision())
            .unwrap_or(DEFAULT_PRECISION);
        let log_level = layers
            .iter()
            .find_map(|layer| layer.log_level())
            .map(str::to_string);

        Self {
            precision,
            log_level,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("precision", self.precision, 0, MAX_PRECISION)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
