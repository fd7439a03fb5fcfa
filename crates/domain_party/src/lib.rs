//! Party Domain
//!
//! This crate manages policyholders: the customers who buy products and
//! owe payments.
//!
//! # Policyholder Lifecycle
//!
//! ```text
//! PendingRegistration -> Active <-> Suspended
//! ```
//!
//! Registration stamps the registration date exactly once. A policyholder
//! keeps the ids of its products and payments in the order they were added,
//! without duplicates. The ids are opaque: nothing checks that the product
//! or payment they name exists.

pub mod policyholder;

pub use policyholder::{Policyholder, PolicyholderStatus};
