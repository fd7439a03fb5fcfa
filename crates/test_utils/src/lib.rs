//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the back-office test suites.
//!
//! # Modules
//!
//! - `fixtures`: Fixed timestamps, money values, and deterministic ids
//! - `assertions`: Assertion helpers for outcomes, money, and details
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
