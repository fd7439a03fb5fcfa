//! Billing Domain - Payment Obligations
//!
//! This crate tracks what a policyholder owes for a product, when it is
//! due, and what happens when it is paid late.
//!
//! # Payment Lifecycle
//!
//! ```text
//! Pending -> Paid                     (processed on or before the due date)
//! Pending -> Overdue                  (processed after the due date)
//! Overdue -> Paid | Overdue           (processed again)
//! Overdue -> PenaltyApplied           (late penalty folded into the amount)
//! ```
//!
//! `Paid` and `PenaltyApplied` decline any further processing or penalty.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use core_kernel::{Currency, Money, PolicyholderId, ProductId, Rate};
//! use domain_billing::{Payment, PaymentStatus};
//! use rust_decimal::Decimal;
//!
//! let now = Utc::now();
//! let mut payment = Payment::new(
//!     PolicyholderId::new(),
//!     ProductId::new(),
//!     Money::new(Decimal::new(850, 0), Currency::USD),
//!     now - Duration::days(5),
//! )
//! .unwrap();
//!
//! assert!(payment.process_at(now).is_applied());
//! assert_eq!(payment.status(), PaymentStatus::Overdue);
//!
//! assert!(payment.apply_penalty(Rate::new(Decimal::new(5, 2))).is_applied());
//! assert_eq!(payment.amount().amount(), Decimal::new(89250, 2));
//! ```

pub mod payment;
pub mod reminder;
pub mod error;

pub use payment::{Payment, PaymentStatus};
pub use reminder::{Reminder, ReminderKind};
pub use error::BillingError;
