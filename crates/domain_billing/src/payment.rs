//! Payment obligations
//!
//! A payment is one amount a policyholder owes for a product by a due date.
//! Processing compares the date the money arrived against the due date;
//! late payments may then carry a penalty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use core_kernel::{
    format_timestamp, Details, Money, Outcome, PaymentId, PolicyholderId, ProductId, Rate,
    Rejection, NOT_SET,
};

use crate::error::BillingError;
use crate::reminder::{Reminder, ReminderKind};

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting payment
    Pending,
    /// Paid on or before the due date
    Paid,
    /// Paid after the due date
    Overdue,
    /// Late penalty folded into the amount
    PenaltyApplied,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::PenaltyApplied => "penalty_applied",
        }
    }

    /// Returns true once no further processing or penalty is accepted
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::PenaltyApplied)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment owed by a policyholder for a product
///
/// The policyholder and product ids are not checked against anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    id: PaymentId,
    policyholder_id: PolicyholderId,
    product_id: ProductId,
    /// Amount due, including any penalty
    amount: Money,
    due_date: DateTime<Utc>,
    /// Date of the most recent accepted processing
    payment_date: Option<DateTime<Utc>>,
    status: PaymentStatus,
    penalty_amount: Money,
}

impl Payment {
    /// Creates a pending payment
    ///
    /// # Arguments
    ///
    /// * `policyholder_id` - Who owes the payment
    /// * `product_id` - What the payment is for
    /// * `amount` - Amount due
    /// * `due_date` - Last moment the payment counts as on time
    ///
    /// # Errors
    ///
    /// Returns `BillingError::NegativeAmount` if the amount is below zero
    pub fn new(
        policyholder_id: PolicyholderId,
        product_id: ProductId,
        amount: Money,
        due_date: DateTime<Utc>,
    ) -> Result<Self, BillingError> {
        if amount.is_negative() {
            return Err(BillingError::NegativeAmount(amount.to_string()));
        }

        let payment = Self {
            id: PaymentId::new_v7(),
            policyholder_id,
            product_id,
            amount,
            due_date,
            payment_date: None,
            status: PaymentStatus::Pending,
            penalty_amount: Money::zero(amount.currency()),
        };

        info!(
            payment_id = %payment.id,
            %policyholder_id,
            %product_id,
            amount = %amount,
            due_date = %format_timestamp(&due_date),
            "Payment created"
        );
        Ok(payment)
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn policyholder_id(&self) -> PolicyholderId {
        self.policyholder_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Amount due, including any applied penalty
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn payment_date(&self) -> Option<DateTime<Utc>> {
        self.payment_date
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn penalty_amount(&self) -> Money {
        self.penalty_amount
    }

    /// Processes the payment as of now
    pub fn process(&mut self) -> Outcome {
        self.process_at(Utc::now())
    }

    /// Processes the payment as received at `payment_date`
    ///
    /// Accepted from `Pending` and `Overdue` only. The payment date is
    /// recorded, then the payment becomes `Paid` if it arrived on or before
    /// the due date and `Overdue` otherwise. Processing an overdue payment
    /// again overwrites the earlier payment date.
    pub fn process_at(&mut self, payment_date: DateTime<Utc>) -> Outcome {
        match self.status {
            PaymentStatus::Pending | PaymentStatus::Overdue => {
                self.payment_date = Some(payment_date);

                if payment_date <= self.due_date {
                    self.status = PaymentStatus::Paid;
                    info!(
                        payment_id = %self.id,
                        payment_date = %payment_date.format("%Y-%m-%d"),
                        "Payment processed successfully, status paid"
                    );
                } else {
                    self.status = PaymentStatus::Overdue;
                    info!(
                        payment_id = %self.id,
                        payment_date = %payment_date.format("%Y-%m-%d"),
                        due_date = %self.due_date.format("%Y-%m-%d"),
                        "Payment processed after its due date, status overdue"
                    );
                }
                Outcome::Applied
            }
            PaymentStatus::Paid | PaymentStatus::PenaltyApplied => {
                self.decline(Rejection::AlreadyInStatus(self.status.to_string()))
            }
        }
    }

    /// Composes a reminder matching the current status
    ///
    /// Never changes the payment.
    pub fn send_reminder(&self) -> Reminder {
        let reminder = match self.status {
            PaymentStatus::Pending => Reminder {
                kind: ReminderKind::Standard,
                message: format!(
                    "Reminder: Payment '{}' for Policyholder '{}' (Amount: {}) is due on {}. Please make your payment soon.",
                    self.id,
                    self.policyholder_id,
                    self.amount,
                    self.due_date.format("%Y-%m-%d"),
                ),
            },
            PaymentStatus::Overdue => Reminder {
                kind: ReminderKind::Urgent,
                message: format!(
                    "URGENT Reminder: Payment '{}' for Policyholder '{}' (Amount: {}) was due on {}. It is now overdue.",
                    self.id,
                    self.policyholder_id,
                    self.amount,
                    self.due_date.format("%Y-%m-%d"),
                ),
            },
            PaymentStatus::Paid | PaymentStatus::PenaltyApplied => Reminder {
                kind: ReminderKind::NotNeeded,
                message: format!(
                    "No reminder needed for Payment '{}'. Current status: {}.",
                    self.id, self.status
                ),
            },
        };

        info!(payment_id = %self.id, kind = ?reminder.kind, "{}", reminder.message);
        reminder
    }

    /// Folds a late-payment penalty of `rate` into the amount due
    ///
    /// Only an overdue payment can be penalised, and only once. The penalty
    /// is `amount × rate`; it is recorded as `penalty_amount` and added to
    /// `amount` in the same step. A penalty too large to represent is
    /// declined and the payment is left as it was.
    pub fn apply_penalty(&mut self, rate: Rate) -> Outcome {
        match self.status {
            PaymentStatus::Overdue => {
                if rate.is_negative() {
                    return self.decline(Rejection::NegativeRate(rate.to_string()));
                }

                let charged = rate.apply(&self.amount).and_then(|penalty| {
                    self.amount.checked_add(&penalty).map(|total| (penalty, total))
                });
                let (penalty, total) = match charged {
                    Ok(charged) => charged,
                    Err(e) => return self.decline(Rejection::AmountOutOfRange(e.to_string())),
                };

                self.penalty_amount = penalty;
                self.amount = total;
                self.status = PaymentStatus::PenaltyApplied;

                info!(
                    payment_id = %self.id,
                    %rate,
                    penalty = %penalty,
                    amount_due = %total,
                    "Penalty applied"
                );
                Outcome::Applied
            }
            PaymentStatus::Paid => self.decline(Rejection::AlreadySettled),
            PaymentStatus::PenaltyApplied => self.decline(Rejection::PenaltyAlreadyApplied),
            PaymentStatus::Pending => {
                self.decline(Rejection::invalid_transition("apply penalty", self.status))
            }
        }
    }

    /// Ordered view: id, policyholder_id, product_id, amount, due_date,
    /// payment_date, status, penalty_amount
    pub fn details(&self) -> Details {
        let payment_date = self
            .payment_date
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| NOT_SET.to_string());

        Details::new()
            .with("id", self.id.to_string())
            .with("policyholder_id", self.policyholder_id.to_string())
            .with("product_id", self.product_id.to_string())
            .with("amount", self.amount.to_string())
            .with("due_date", format_timestamp(&self.due_date))
            .with("payment_date", payment_date)
            .with("status", self.status.as_str())
            .with("penalty_amount", self.penalty_amount.to_string())
    }

    fn decline(&self, reason: Rejection) -> Outcome {
        warn!(payment_id = %self.id, status = %self.status, %reason, "Payment operation declined");
        Outcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn payment_due(due_date: DateTime<Utc>) -> Payment {
        Payment::new(
            PolicyholderId::new(),
            ProductId::new(),
            Money::new(dec!(200.00), Currency::USD),
            due_date,
        )
        .unwrap()
    }

    #[test]
    fn test_new_payment_defaults() {
        let due = Utc::now();
        let p = payment_due(due);
        assert_eq!(p.status(), PaymentStatus::Pending);
        assert!(p.payment_date().is_none());
        assert!(p.penalty_amount().is_zero());
        assert_eq!(p.penalty_amount().currency(), Currency::USD);
    }

    #[test]
    fn test_negative_amount_rejected_at_creation() {
        let result = Payment::new(
            PolicyholderId::new(),
            ProductId::new(),
            Money::new(dec!(-1), Currency::USD),
            Utc::now(),
        );
        assert!(matches!(result, Err(BillingError::NegativeAmount(_))));
    }

    #[test]
    fn test_negative_rate_declined() {
        let due = Utc::now();
        let mut p = payment_due(due);
        let _ = p.process_at(due + Duration::days(1));

        let outcome = p.apply_penalty(Rate::new(dec!(-0.10)));
        assert!(matches!(outcome, Outcome::Rejected(Rejection::NegativeRate(_))));
        assert_eq!(p.status(), PaymentStatus::Overdue);
        assert_eq!(p.amount().amount(), dec!(200.00));
    }

    #[test]
    fn test_settled_statuses() {
        assert!(PaymentStatus::Paid.is_settled());
        assert!(PaymentStatus::PenaltyApplied.is_settled());
        assert!(!PaymentStatus::Pending.is_settled());
        assert!(!PaymentStatus::Overdue.is_settled());
    }
}
