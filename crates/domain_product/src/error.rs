//! Product domain errors

use thiserror::Error;

/// Errors that can occur in the product domain
///
/// Lifecycle operations never fail; they return outcomes. These errors
/// cover construction and the named-field update boundary.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Price below zero
    #[error("Product price must not be negative: {0}")]
    NegativePrice(String),

    /// Update payload is not a JSON object
    #[error("Product update must be an object of named fields, got {0}")]
    NotAnObject(&'static str),

    /// A recognized field carried a value of the wrong type
    #[error("Invalid value for product field '{field}': {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ProductError {
    pub fn invalid_field(field: &'static str, source: serde_json::Error) -> Self {
        ProductError::InvalidField { field, source }
    }
}
