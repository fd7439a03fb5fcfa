//! Command-line Demonstration
//!
//! Drives the product, policyholder, and payment lifecycles end to end and
//! renders the resulting account details.
//!
//! # Architecture
//!
//! - **Config**: `DEMO_*` environment settings with defaults
//! - **Scenario**: the scripted run over the domain crates
//! - **Report**: text and JSON rendering of the run
//! - **Telemetry**: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use interface_cli::{config::DemoConfig, scenario};
//!
//! let report = scenario::run(&DemoConfig::default(), Utc::now()).unwrap();
//! assert_eq!(report.accounts.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;
pub mod telemetry;

pub use config::{DemoConfig, LogFormat, OutputFormat};
pub use error::CliError;
pub use report::{AccountReport, DemoReport};
