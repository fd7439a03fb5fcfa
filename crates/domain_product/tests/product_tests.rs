//! Product Tests
//!
//! Lifecycle transitions, field updates (typed and named), and the detail
//! view of the Product entity.

use core_kernel::{Currency, Money, Outcome, Rejection};
use domain_product::{Product, ProductError, ProductStatus, ProductUpdate};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;
use test_utils::{
    assert_applied, assert_detail, assert_detail_keys, assert_money_eq, assert_rejected,
    money_strategy, MoneyFixtures,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn create_test_product() -> Product {
    Product::new(
        "LifeGuard Pro",
        "Comprehensive life insurance with investment options.",
        MoneyFixtures::usd_1200(),
        "Covers death, critical illness, and provides maturity benefits.",
    )
    .expect("Test product creation should succeed")
}

fn create_active_product() -> Product {
    let mut product = create_test_product();
    assert_applied(&product.activate());
    product
}

mod creation {
    use super::*;

    #[test]
    fn test_new_product_fields() {
        let product = create_test_product();

        assert_eq!(product.name(), "LifeGuard Pro");
        assert_eq!(product.price(), MoneyFixtures::usd_1200());
        assert_eq!(product.status(), ProductStatus::PendingCreation);
        assert!(product.id().to_string().starts_with("PRD-"));
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(create_test_product().id(), create_test_product().id());
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let product = Product::new("Free Trial", "", MoneyFixtures::usd_zero(), "");
        assert!(product.is_ok());
    }

    #[test]
    fn test_negative_price_is_an_error() {
        let result = Product::new("Broken", "", Money::new(dec!(-10), Currency::USD), "");
        assert!(matches!(result, Err(ProductError::NegativePrice(_))));
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn test_activate_is_idempotent() {
        let mut product = create_test_product();

        assert_applied(&product.activate());
        assert_eq!(product.status(), ProductStatus::Active);

        assert_rejected(&product.activate(), &Rejection::AlreadyInStatus("active".into()));
        assert_eq!(product.status(), ProductStatus::Active);
    }

    #[test]
    fn test_suspend_and_reactivate_toggle() {
        let mut product = create_active_product();

        assert_applied(&product.suspend());
        assert_eq!(product.status(), ProductStatus::Suspended);
        assert!(!product.is_active());

        assert_applied(&product.reactivate());
        assert_eq!(product.status(), ProductStatus::Active);
        assert!(product.is_active());
    }

    #[test]
    fn test_suspend_twice_is_declined() {
        let mut product = create_active_product();
        assert_applied(&product.suspend());
        assert_rejected(&product.suspend(), &Rejection::AlreadyInStatus("suspended".into()));
    }

    #[test]
    fn test_reactivate_requires_suspension() {
        let mut product = create_test_product();
        assert_rejected(
            &product.reactivate(),
            &Rejection::invalid_transition("reactivate", ProductStatus::PendingCreation),
        );

        let mut active = create_active_product();
        assert_rejected(&active.reactivate(), &Rejection::AlreadyInStatus("active".into()));
    }

    #[test]
    fn test_suspended_product_cannot_be_activated() {
        let mut product = create_active_product();
        assert_applied(&product.suspend());

        assert_rejected(
            &product.activate(),
            &Rejection::invalid_transition("activate", ProductStatus::Suspended),
        );
        assert_eq!(product.status(), ProductStatus::Suspended);
    }
}

mod updates {
    use super::*;

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut product = create_active_product();
        let update = ProductUpdate::default()
            .price(dec!(1250.00))
            .description("Life insurance with investment options and riders.");

        assert_applied(&product.update(update));

        assert_money_eq(&product.price(), dec!(1250.00));
        assert_eq!(product.description(), "Life insurance with investment options and riders.");
        assert_eq!(product.name(), "LifeGuard Pro");
        assert_eq!(
            product.coverage_details(),
            "Covers death, critical illness, and provides maturity benefits."
        );
    }

    #[test]
    fn test_update_does_not_touch_status() {
        let mut product = create_test_product();
        assert_applied(&product.update(ProductUpdate::default().name("LifeGuard Pro II")));
        assert_eq!(product.status(), ProductStatus::PendingCreation);
    }

    #[test]
    fn test_updated_price_keeps_currency() {
        let mut product = Product::new("Euro Cover", "", Money::new(dec!(100), Currency::EUR), "")
            .unwrap();
        assert_applied(&product.update(ProductUpdate::default().price(dec!(120))));
        assert_eq!(product.price().currency(), Currency::EUR);
    }

    #[test]
    fn test_empty_update_is_declined() {
        let mut product = create_test_product();
        assert_rejected(&product.update(ProductUpdate::default()), &Rejection::NoFieldsUpdated);
    }

    #[test]
    fn test_json_update_skips_unknown_fields() {
        let mut product = create_active_product();

        let outcome = product
            .update_from_json(json!({ "price": 550.0, "status": "suspended" }))
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_money_eq(&product.price(), dec!(550));
        assert_eq!(product.status(), ProductStatus::Active);
    }

    #[test]
    fn test_json_update_with_only_unknown_fields_is_declined() {
        let mut product = create_test_product();
        let outcome = product.update_from_json(json!({ "colour": "blue" })).unwrap();
        assert_rejected(&outcome, &Rejection::NoFieldsUpdated);
    }

    #[test]
    fn test_json_update_with_bad_value_leaves_product_unchanged() {
        let mut product = create_test_product();
        let result = product.update_from_json(json!({ "name": "New", "price": "lots" }));

        assert!(matches!(result, Err(ProductError::InvalidField { field: "price", .. })));
        assert_eq!(product.name(), "LifeGuard Pro");
    }

    proptest! {
        #[test]
        fn price_update_replaces_amount_only(original in money_strategy(), next in money_strategy()) {
            let mut product = Product::new("Cover", "", original, "").unwrap();
            prop_assert!(product.update(ProductUpdate::default().price(next.amount())).is_applied());

            prop_assert_eq!(product.price().amount(), next.amount());
            prop_assert_eq!(product.price().currency(), original.currency());
            prop_assert_eq!(product.status(), ProductStatus::PendingCreation);
        }
    }
}

mod details {
    use super::*;

    #[test]
    fn test_details_order_and_formatting() {
        let product = create_active_product();
        let details = product.details();

        assert_detail_keys(
            &details,
            &["id", "name", "description", "price", "coverage_details", "status"],
        );
        assert_detail(&details, "id", &product.id().to_string());
        assert_detail(&details, "price", "$1200.00");
        assert_detail(&details, "status", "active");
    }

    #[test]
    fn test_product_serializes_with_snake_case_status() {
        let product = create_test_product();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["status"], "pending_creation");
        assert_eq!(json["name"], "LifeGuard Pro");
    }
}
