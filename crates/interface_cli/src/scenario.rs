//! Demonstration scenario
//!
//! Walks three products, two policyholders, and two payments through their
//! lifecycles: one payment arrives on time, the other late and is penalised.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{Money, Outcome};
use domain_billing::Payment;
use domain_party::Policyholder;
use domain_product::Product;
use rust_decimal_macros::dec;
use tracing::info;

use crate::config::DemoConfig;
use crate::error::CliError;
use crate::report::{AccountReport, DemoReport};

/// Runs the full demonstration with `now` as the reference time
///
/// # Errors
///
/// Returns `CliError::Scenario` if any step that should succeed is declined,
/// or a domain error if an entity cannot be built.
pub fn run(config: &DemoConfig, now: DateTime<Utc>) -> Result<DemoReport, CliError> {
    let currency = config.currency;

    info!("Creating products");
    let mut life = Product::new(
        "LifeGuard Pro",
        "Comprehensive life insurance with investment options.",
        Money::new(dec!(1200.00), currency),
        "Covers death, critical illness, and provides maturity benefits.",
    )?;
    let mut health = Product::new(
        "HealthShield Max",
        "Premium health insurance with extensive hospital and outpatient coverage.",
        Money::new(dec!(850.00), currency),
        "Covers hospitalization, surgeries, doctor visits, and prescription drugs.",
    )?;
    let mut auto = Product::new(
        "DriveSafe Auto",
        "Standard auto insurance for personal vehicles.",
        Money::new(dec!(450.00), currency),
        "Covers third-party damage, fire, and theft.",
    )?;
    for product in [&mut life, &mut health, &mut auto] {
        require("activate product", product.activate())?;
    }

    info!("Registering policyholders");
    let mut john = Policyholder::new(
        "John Doe",
        "123 Main St, Anytown, USA",
        "john.doe@example.com",
    );
    let mut jane = Policyholder::new(
        "Jane Smith",
        "456 Oak Ave, Otherville, USA",
        "jane.smith@example.com",
    );
    require("register policyholder", john.register_at(now))?;
    require("register policyholder", jane.register_at(now))?;

    info!(policyholder = %john.name(), product = %life.name(), "Purchase on time");
    require("add product", john.add_product(life.id()))?;
    let mut on_time = Payment::new(john.id(), life.id(), life.price(), now + Duration::days(30))?;
    require("add payment", john.add_payment(on_time.id()))?;
    require("process payment", on_time.process_at(now + Duration::days(5)))?;

    info!(policyholder = %jane.name(), product = %health.name(), "Purchase paid late");
    require("add product", jane.add_product(health.id()))?;
    let mut late = Payment::new(jane.id(), health.id(), health.price(), now - Duration::days(5))?;
    require("add payment", jane.add_payment(late.id()))?;
    require("process payment", late.process_at(now))?;
    let late_reminder = late.send_reminder();
    require("apply penalty", late.apply_penalty(config.penalty()))?;

    Ok(DemoReport {
        catalog: vec![life.details(), health.details(), auto.details()],
        accounts: vec![
            AccountReport {
                name: john.name().to_string(),
                policyholder: john.details(),
                products: vec![life.details()],
                payments: vec![on_time.details()],
                reminders: Vec::new(),
            },
            AccountReport {
                name: jane.name().to_string(),
                policyholder: jane.details(),
                products: vec![health.details()],
                payments: vec![late.details()],
                reminders: vec![late_reminder],
            },
        ],
    })
}

fn require(step: &'static str, outcome: Outcome) -> Result<(), CliError> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Rejected(reason) => Err(CliError::Scenario { step, reason }),
    }
}
