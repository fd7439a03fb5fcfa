//! CLI error handling

use core_kernel::Rejection;
use domain_billing::BillingError;
use domain_product::ProductError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    #[error("Scenario step '{step}' was declined: {reason}")]
    Scenario {
        step: &'static str,
        reason: Rejection,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
