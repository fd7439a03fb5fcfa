//! Billing domain errors

use thiserror::Error;

/// Errors that can occur in the billing domain
///
/// Processing and penalty operations return outcomes instead; these errors
/// only guard construction.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Payment amount below zero
    #[error("Payment amount must not be negative: {0}")]
    NegativeAmount(String),
}
