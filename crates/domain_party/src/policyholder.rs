//! Policyholder entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use core_kernel::{
    format_timestamp, Details, Outcome, PaymentId, PolicyholderId, ProductId, Rejection, NOT_SET,
};

/// Policyholder lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyholderStatus {
    /// Known to the system but not yet registered
    PendingRegistration,
    /// Registered and in good standing
    Active,
    /// Temporarily blocked
    Suspended,
}

impl PolicyholderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyholderStatus::PendingRegistration => "pending_registration",
            PolicyholderStatus::Active => "active",
            PolicyholderStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for PolicyholderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer holding insurance products
///
/// # State Machine
///
/// - PendingRegistration -> Active (via register, stamps `registered_date`)
/// - Active -> Suspended (via suspend)
/// - Suspended -> Active (via reactivate)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policyholder {
    id: PolicyholderId,
    name: String,
    address: String,
    contact_info: String,
    status: PolicyholderStatus,
    /// Set once, on registration
    registered_date: Option<DateTime<Utc>>,
    products: Vec<ProductId>,
    payments: Vec<PaymentId>,
}

impl Policyholder {
    /// Creates a new policyholder awaiting registration
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        let holder = Self {
            id: PolicyholderId::new_v7(),
            name: name.into(),
            address: address.into(),
            contact_info: contact_info.into(),
            status: PolicyholderStatus::PendingRegistration,
            registered_date: None,
            products: Vec::new(),
            payments: Vec::new(),
        };

        info!(policyholder_id = %holder.id, name = %holder.name, "Policyholder created");
        holder
    }

    pub fn id(&self) -> PolicyholderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn status(&self) -> PolicyholderStatus {
        self.status
    }

    pub fn registered_date(&self) -> Option<DateTime<Utc>> {
        self.registered_date
    }

    /// Associated product ids, in the order they were added
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    /// Associated payment ids, in the order they were added
    pub fn payments(&self) -> &[PaymentId] {
        &self.payments
    }

    pub fn is_active(&self) -> bool {
        self.status == PolicyholderStatus::Active
    }

    /// Registers the policyholder as of now
    pub fn register(&mut self) -> Outcome {
        self.register_at(Utc::now())
    }

    /// Registers the policyholder, recording `registered_at` as the
    /// registration date
    ///
    /// Only a pending policyholder can register; afterwards the date never
    /// changes.
    pub fn register_at(&mut self, registered_at: DateTime<Utc>) -> Outcome {
        match self.status {
            PolicyholderStatus::PendingRegistration => {
                self.status = PolicyholderStatus::Active;
                self.registered_date = Some(registered_at);
                info!(
                    policyholder_id = %self.id,
                    name = %self.name,
                    registered_date = %format_timestamp(&registered_at),
                    "Policyholder registered and now active"
                );
                Outcome::Applied
            }
            PolicyholderStatus::Active | PolicyholderStatus::Suspended => {
                self.decline(Rejection::AlreadyInStatus(self.status.to_string()))
            }
        }
    }

    pub fn suspend(&mut self) -> Outcome {
        match self.status {
            PolicyholderStatus::Active => {
                self.status = PolicyholderStatus::Suspended;
                info!(policyholder_id = %self.id, name = %self.name, "Policyholder suspended");
                Outcome::Applied
            }
            PolicyholderStatus::Suspended => {
                self.decline(Rejection::AlreadyInStatus(self.status.to_string()))
            }
            PolicyholderStatus::PendingRegistration => {
                self.decline(Rejection::invalid_transition("suspend", self.status))
            }
        }
    }

    pub fn reactivate(&mut self) -> Outcome {
        match self.status {
            PolicyholderStatus::Suspended => {
                self.status = PolicyholderStatus::Active;
                info!(policyholder_id = %self.id, name = %self.name, "Policyholder reactivated and now active");
                Outcome::Applied
            }
            PolicyholderStatus::Active => {
                self.decline(Rejection::AlreadyInStatus(self.status.to_string()))
            }
            PolicyholderStatus::PendingRegistration => {
                self.decline(Rejection::invalid_transition("reactivate", self.status))
            }
        }
    }

    /// Associates a product; adding the same id again is declined
    pub fn add_product(&mut self, product_id: ProductId) -> Outcome {
        if self.products.contains(&product_id) {
            return self.decline(Rejection::AlreadyAssociated(product_id.to_string()));
        }
        self.products.push(product_id);
        info!(policyholder_id = %self.id, %product_id, "Product added to policyholder");
        Outcome::Applied
    }

    /// Records a payment; recording the same id again is declined
    pub fn add_payment(&mut self, payment_id: PaymentId) -> Outcome {
        if self.payments.contains(&payment_id) {
            return self.decline(Rejection::AlreadyAssociated(payment_id.to_string()));
        }
        self.payments.push(payment_id);
        info!(policyholder_id = %self.id, %payment_id, "Payment recorded for policyholder");
        Outcome::Applied
    }

    /// Ordered view: id, name, address, contact_info, status,
    /// registered_date, products, payments
    pub fn details(&self) -> Details {
        let registered_date = self
            .registered_date
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| NOT_SET.to_string());

        Details::new()
            .with("id", self.id.to_string())
            .with("name", self.name.as_str())
            .with("address", self.address.as_str())
            .with("contact_info", self.contact_info.as_str())
            .with("status", self.status.as_str())
            .with("registered_date", registered_date)
            .with("products", self.products.iter().map(ToString::to_string).collect::<Vec<_>>())
            .with("payments", self.payments.iter().map(ToString::to_string).collect::<Vec<_>>())
    }

    fn decline(&self, reason: Rejection) -> Outcome {
        warn!(policyholder_id = %self.id, name = %self.name, status = %self.status, %reason, "Policyholder operation declined");
        Outcome::Rejected(reason)
    }
}
