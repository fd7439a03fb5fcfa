//! Pre-built Test Fixtures
//!
//! Fixed, predictable data so due-date comparisons and rendered details do
//! not depend on the wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Currency, Money, PaymentId, PolicyholderId, ProductId, Rate};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Life product premium
    pub fn usd_1200() -> Money {
        Money::new(dec!(1200.00), Currency::USD)
    }

    /// Health product premium
    pub fn usd_850() -> Money {
        Money::new(dec!(850.00), Currency::USD)
    }

    /// Auto product premium
    pub fn usd_450() -> Money {
        Money::new(dec!(450.00), Currency::USD)
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Standard 5% late penalty
    pub fn penalty_rate() -> Rate {
        Rate::new(dec!(0.05))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Reference "now" for scenario tests (Jun 15, 2024 12:00 UTC)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Due date in the future relative to `now`
    pub fn due_in_days(days: i64) -> DateTime<Utc> {
        Self::now() + Duration::days(days)
    }

    /// Due date in the past relative to `now`
    pub fn due_days_ago(days: i64) -> DateTime<Utc> {
        Self::now() - Duration::days(days)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic product ID for testing
    pub fn product_id() -> ProductId {
        ProductId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic policyholder ID for testing
    pub fn policyholder_id() -> PolicyholderId {
        PolicyholderId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic payment ID for testing
    pub fn payment_id() -> PaymentId {
        PaymentId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}
