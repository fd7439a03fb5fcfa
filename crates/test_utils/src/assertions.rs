//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful failure
//! messages than a bare `assert!`.

use core_kernel::{Details, Money, Outcome, Rejection};
use rust_decimal::Decimal;

/// Asserts that an operation changed the entity
pub fn assert_applied(outcome: &Outcome) {
    assert!(
        outcome.is_applied(),
        "Expected operation to be applied, got {:?}",
        outcome
    );
}

/// Asserts that an operation was declined for the given reason
pub fn assert_rejected(outcome: &Outcome, expected: &Rejection) {
    match outcome {
        Outcome::Rejected(reason) => assert_eq!(
            reason, expected,
            "Operation rejected for an unexpected reason"
        ),
        Outcome::Applied => panic!("Expected rejection ({}), but operation was applied", expected),
    }
}

/// Asserts that a Money value carries exactly the expected amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money amount mismatch: actual={}, expected={} {}",
        actual,
        actual.currency().symbol(),
        expected
    );
}

/// Asserts that a detail mapping holds `expected` text under `key`
pub fn assert_detail(details: &Details, key: &str, expected: &str) {
    match details.text(key) {
        Some(actual) => assert_eq!(actual, expected, "Detail '{}' mismatch", key),
        None => panic!("Detail '{}' missing or not text in:\n{}", key, details),
    }
}

/// Asserts that a detail mapping has exactly these keys, in order
pub fn assert_detail_keys(details: &Details, expected: &[&str]) {
    let keys: Vec<&str> = details.keys().collect();
    assert_eq!(keys, expected, "Detail keys or their order differ");
}
