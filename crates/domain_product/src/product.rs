//! Product entity
//!
//! A product is an insurance offering with a price and a description of
//! what it covers. Its status gates whether it can be sold.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

use core_kernel::{Details, Money, Outcome, ProductId, Rejection};

use crate::error::ProductError;
use crate::update::ProductUpdate;

/// Product lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Defined but not yet offered
    PendingCreation,
    /// Available for purchase
    Active,
    /// Temporarily withdrawn; existing policies are unaffected
    Suspended,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::PendingCreation => "pending_creation",
            ProductStatus::Active => "active",
            ProductStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An insurance offering
///
/// # State Machine
///
/// - PendingCreation -> Active (via activate)
/// - Active -> Suspended (via suspend)
/// - Suspended -> Active (via reactivate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    coverage_details: String,
    status: ProductStatus,
}

impl Product {
    /// Creates a new product in `PendingCreation`
    ///
    /// # Arguments
    ///
    /// * `name` - Marketing name of the product
    /// * `description` - Short description
    /// * `price` - Price per billing period
    /// * `coverage_details` - What the product covers
    ///
    /// # Errors
    ///
    /// Returns `ProductError::NegativePrice` if the price is below zero
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        coverage_details: impl Into<String>,
    ) -> Result<Self, ProductError> {
        if price.is_negative() {
            return Err(ProductError::NegativePrice(price.to_string()));
        }

        let product = Self {
            id: ProductId::new_v7(),
            name: name.into(),
            description: description.into(),
            price,
            coverage_details: coverage_details.into(),
            status: ProductStatus::PendingCreation,
        };

        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn coverage_details(&self) -> &str {
        &self.coverage_details
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Returns true if the product can currently be sold
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Completes creation and makes the product available
    pub fn activate(&mut self) -> Outcome {
        match self.status {
            ProductStatus::PendingCreation => {
                self.status = ProductStatus::Active;
                info!(product_id = %self.id, name = %self.name, "Product created and now active");
                Outcome::Applied
            }
            ProductStatus::Active => self.decline(Rejection::AlreadyInStatus(self.status.to_string())),
            ProductStatus::Suspended => {
                self.decline(Rejection::invalid_transition("activate", self.status))
            }
        }
    }

    /// Overwrites the fields present in `update`
    ///
    /// The status is never touched. An update without any field, or with a
    /// negative price, is declined as a whole.
    pub fn update(&mut self, update: ProductUpdate) -> Outcome {
        if update.is_empty() {
            return self.decline(Rejection::NoFieldsUpdated);
        }

        let price = update.price.map(|p| Money::new(p, self.price.currency()));
        if let Some(price) = price.filter(Money::is_negative) {
            return self.decline(Rejection::NegativeAmount(price.to_string()));
        }

        if let Some(name) = update.name {
            info!(product_id = %self.id, field = "name", value = %name, "Product field updated");
            self.name = name;
        }
        if let Some(description) = update.description {
            info!(product_id = %self.id, field = "description", value = %description, "Product field updated");
            self.description = description;
        }
        if let Some(price) = price {
            info!(product_id = %self.id, field = "price", value = %price, "Product field updated");
            self.price = price;
        }
        if let Some(coverage_details) = update.coverage_details {
            info!(product_id = %self.id, field = "coverage_details", value = %coverage_details, "Product field updated");
            self.coverage_details = coverage_details;
        }

        Outcome::Applied
    }

    /// Parses a named-field update and applies it
    ///
    /// Unrecognized keys are skipped with a warning; see
    /// [`ProductUpdate::from_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be parsed; the product is then
    /// left unchanged.
    pub fn update_from_json(&mut self, fields: Value) -> Result<Outcome, ProductError> {
        let parsed = ProductUpdate::from_json(fields)?;
        Ok(self.update(parsed.update))
    }

    /// Withdraws an active product from sale
    pub fn suspend(&mut self) -> Outcome {
        match self.status {
            ProductStatus::Active => {
                self.status = ProductStatus::Suspended;
                info!(product_id = %self.id, name = %self.name, "Product suspended");
                Outcome::Applied
            }
            ProductStatus::Suspended => self.decline(Rejection::AlreadyInStatus(self.status.to_string())),
            ProductStatus::PendingCreation => {
                self.decline(Rejection::invalid_transition("suspend", self.status))
            }
        }
    }

    /// Returns a suspended product to sale
    pub fn reactivate(&mut self) -> Outcome {
        match self.status {
            ProductStatus::Suspended => {
                self.status = ProductStatus::Active;
                info!(product_id = %self.id, name = %self.name, "Product reactivated and now active");
                Outcome::Applied
            }
            ProductStatus::Active => self.decline(Rejection::AlreadyInStatus(self.status.to_string())),
            ProductStatus::PendingCreation => {
                self.decline(Rejection::invalid_transition("reactivate", self.status))
            }
        }
    }

    /// Ordered view: id, name, description, price, coverage_details, status
    pub fn details(&self) -> Details {
        Details::new()
            .with("id", self.id.to_string())
            .with("name", self.name.as_str())
            .with("description", self.description.as_str())
            .with("price", self.price.to_string())
            .with("coverage_details", self.coverage_details.as_str())
            .with("status", self.status.as_str())
    }

    fn decline(&self, reason: Rejection) -> Outcome {
        warn!(product_id = %self.id, name = %self.name, status = %self.status, %reason, "Product operation declined");
        Outcome::Rejected(reason)
    }
}
