//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{Currency, Money, Rate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::TemporalFixtures;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
    ]
}

/// Strategy for generating non-negative USD amounts with cent precision
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2), Currency::USD))
}

/// Strategy for generating non-negative amounts in any supported currency
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64, currency_strategy()).prop_map(|(minor, currency)| {
        Money::new(Decimal::new(minor, currency.decimal_places()), currency)
    })
}

/// Strategy for generating penalty rates (0% to 100%, basis-point steps)
pub fn rate_strategy() -> impl Strategy<Value = Rate> {
    (0i64..=10_000i64).prop_map(|bp| Rate::new(Decimal::new(bp, 4)))
}

/// Strategy for generating timestamps within a year of the fixture "now"
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (-31_536_000i64..31_536_000i64)
        .prop_map(|secs| TemporalFixtures::now() + Duration::seconds(secs))
}
