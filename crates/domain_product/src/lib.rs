//! Product Domain
//!
//! This crate models the insurance offerings a policyholder can purchase.
//!
//! # Product Lifecycle
//!
//! ```text
//! PendingCreation -> Active <-> Suspended
//! ```
//!
//! A product is never deleted. Operations that the current status does not
//! allow are declined with an [`core_kernel::Outcome::Rejected`] and leave
//! the product unchanged.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_product::{Product, ProductStatus, ProductUpdate};
//! use rust_decimal::Decimal;
//!
//! let mut product = Product::new(
//!     "DriveSafe Auto",
//!     "Standard auto insurance for personal vehicles.",
//!     Money::new(Decimal::new(450, 0), Currency::USD),
//!     "Covers third-party damage, fire, and theft.",
//! )
//! .unwrap();
//!
//! assert!(product.activate().is_applied());
//! assert_eq!(product.status(), ProductStatus::Active);
//!
//! let update = ProductUpdate::default().price(Decimal::new(475, 0));
//! assert!(product.update(update).is_applied());
//! ```

pub mod product;
pub mod update;
pub mod error;

pub use product::{Product, ProductStatus};
pub use update::{ProductUpdate, ParsedUpdate};
pub use error::ProductError;
