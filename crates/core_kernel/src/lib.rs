//! Core Kernel - Foundational types shared by the back-office domains
//!
//! This crate provides the building blocks used by the product, party, and
//! billing crates:
//! - Strongly-typed identifiers so entity references cannot be mixed up
//! - Money and rates with precise decimal arithmetic
//! - `Outcome`, the result of every lifecycle operation
//! - `Details`, the ordered key-value view each entity renders

pub mod money;
pub mod identifiers;
pub mod outcome;
pub mod details;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{ProductId, PolicyholderId, PaymentId};
pub use outcome::{Outcome, Rejection};
pub use details::{Details, DetailValue, format_timestamp, NOT_SET};
