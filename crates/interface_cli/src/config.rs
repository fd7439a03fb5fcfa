//! Demo configuration

use core_kernel::{Currency, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::error::CliError;

/// Environment variable prefix for every demo setting
pub const ENV_PREFIX: &str = "DEMO";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Demo configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Report output format
    pub output: OutputFormat,
    /// Late-payment penalty as a fraction, e.g. 0.05 for 5%
    pub penalty_rate: Decimal,
    /// Currency of every product price in the demo
    pub currency: Currency,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            output: OutputFormat::Text,
            penalty_rate: dec!(0.05),
            currency: Currency::USD,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from `DEMO_*` environment variables
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit environment source
    ///
    /// Missing keys fall back to their defaults; the result is validated.
    pub fn from_environment(environment: config::Environment) -> Result<Self, CliError> {
        let loaded: Self = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks that the penalty rate is a fraction in [0, 1]
    pub fn validate(&self) -> Result<(), CliError> {
        if self.penalty_rate < Decimal::ZERO || self.penalty_rate > Decimal::ONE {
            return Err(CliError::InvalidConfig(format!(
                "penalty_rate must be between 0 and 1, got {}",
                self.penalty_rate
            )));
        }
        Ok(())
    }

    /// Configured penalty rate
    pub fn penalty(&self) -> Rate {
        Rate::new(self.penalty_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(pairs: &[(&str, &str)]) -> config::Environment {
        let mut source = config::Map::new();
        for (key, value) in pairs {
            source.insert(key.to_string(), value.to_string());
        }
        config::Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let loaded = DemoConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.log_format, LogFormat::Text);
        assert_eq!(loaded.output, OutputFormat::Text);
        assert_eq!(loaded.penalty_rate, dec!(0.05));
        assert_eq!(loaded.currency, Currency::USD);
    }

    #[test]
    fn test_values_from_environment() {
        let loaded = DemoConfig::from_environment(environment(&[
            ("DEMO_LOG_LEVEL", "debug"),
            ("DEMO_LOG_FORMAT", "json"),
            ("DEMO_OUTPUT", "json"),
            ("DEMO_PENALTY_RATE", "0.1"),
            ("DEMO_CURRENCY", "EUR"),
        ]))
        .unwrap();

        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.log_format, LogFormat::Json);
        assert_eq!(loaded.output, OutputFormat::Json);
        assert_eq!(loaded.penalty_rate, dec!(0.1));
        assert_eq!(loaded.currency, Currency::EUR);
    }

    #[test]
    fn test_rate_out_of_range_is_rejected() {
        let result = DemoConfig::from_environment(environment(&[("DEMO_PENALTY_RATE", "1.5")]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));

        let negative = DemoConfig {
            penalty_rate: dec!(-0.01),
            ..DemoConfig::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for rate in [Decimal::ZERO, Decimal::ONE] {
            let config = DemoConfig {
                penalty_rate: rate,
                ..DemoConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }
}
