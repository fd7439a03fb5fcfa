//! Tests for the Money and Rate types
//!
//! Covers creation, rounding, formatting, and rate application as used by
//! product prices and payment penalties.

use core_kernel::{Money, Currency, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::USD);
        assert!(m.is_negative());
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_display_rounds_to_currency_places() {
        let m = Money::new(dec!(892.4999), Currency::USD);
        assert_eq!(m.to_string(), "$892.50");
    }

    #[test]
    fn test_gbp_symbol() {
        let m = Money::new(dec!(450), Currency::GBP);
        assert_eq!(m.to_string(), "£450.00");
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let json = serde_json::to_string(&Currency::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(850.00), Currency::USD);
        let b = Money::new(dec!(42.50), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(892.50));
    }

    #[test]
    fn test_checked_add_mismatch() {
        let a = Money::new(dec!(1), Currency::USD);
        let b = Money::new(dec!(1), Currency::JPY);
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "JPY".to_string()))
        );
    }

    #[test]
    fn test_multiply_keeps_currency() {
        let m = Money::new(dec!(1200.00), Currency::GBP)
            .checked_multiply(dec!(0.1))
            .unwrap();
        assert_eq!(m.amount(), dec!(120.00));
        assert_eq!(m.currency(), Currency::GBP);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_round_trips_percentage() {
        let rate = Rate::new(dec!(0.05));
        assert_eq!(rate.as_percentage(), dec!(5.00));
        assert_eq!(Rate::from_percentage(dec!(5)).as_decimal(), dec!(0.05));
    }

    #[test]
    fn test_zero_rate_yields_zero_charge() {
        let charge = Rate::new(Decimal::ZERO)
            .apply(&Money::new(dec!(850), Currency::USD))
            .unwrap();
        assert!(charge.is_zero());
    }

    #[test]
    fn test_negative_rate_detected() {
        assert!(Rate::new(dec!(-0.01)).is_negative());
        assert!(!Rate::new(Decimal::ZERO).is_negative());
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.125)).to_string(), "12.5%");
    }
}
