//! Insurance Back-office - Demo Binary
//!
//! Runs the scripted product, policyholder, and payment walkthrough and
//! prints every account's details.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin insurance-demo
//!
//! # JSON report with a 10% late penalty
//! DEMO_OUTPUT=json DEMO_PENALTY_RATE=0.10 cargo run --bin insurance-demo
//! ```
//!
//! # Environment Variables
//!
//! * `DEMO_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `DEMO_LOG_FORMAT` - Log line format: text or json (default: text)
//! * `DEMO_OUTPUT` - Report format: text or json (default: text)
//! * `DEMO_PENALTY_RATE` - Late penalty as a fraction in [0, 1] (default: 0.05)
//! * `DEMO_CURRENCY` - USD, EUR, GBP or JPY (default: USD)

use anyhow::{Context, Result};
use chrono::Utc;
use interface_cli::{config::DemoConfig, scenario, telemetry::init_tracing, OutputFormat};

fn main() -> Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = DemoConfig::from_env().context("loading demo configuration")?;
    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        penalty_rate = %config.penalty(),
        currency = %config.currency,
        "Starting policy management demonstration"
    );

    let report = scenario::run(&config, Utc::now()).context("running demo scenario")?;

    match config.output {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json().context("rendering report")?),
    }

    tracing::info!("Demonstration complete");
    Ok(())
}
