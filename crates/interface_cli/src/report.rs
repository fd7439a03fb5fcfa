//! Demo report rendering

use core_kernel::Details;
use domain_billing::Reminder;
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 50;

/// Everything the demo produced for one policyholder
#[derive(Debug, Clone, Serialize)]
pub struct AccountReport {
    pub name: String,
    pub policyholder: Details,
    pub products: Vec<Details>,
    pub payments: Vec<Details>,
    /// Reminders composed while the account's payments were handled
    pub reminders: Vec<Reminder>,
}

/// Result of a full demo run
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    /// Every product created, in creation order
    pub catalog: Vec<Details>,
    pub accounts: Vec<AccountReport>,
}

impl DemoReport {
    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn account(&self, name: &str) -> Option<&AccountReport> {
        self.accounts.iter().find(|account| account.name == name)
    }
}

impl fmt::Display for AccountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "ACCOUNT DETAILS FOR: {}", self.name)?;
        writeln!(f, "{rule}")?;
        write!(f, "{}", self.policyholder)?;

        writeln!(f, "\n--- Associated Product Details ---")?;
        for product in &self.products {
            write!(f, "{product}")?;
        }

        writeln!(f, "\n--- Associated Payment Details ---")?;
        for payment in &self.payments {
            write!(f, "{payment}")?;
        }

        if !self.reminders.is_empty() {
            writeln!(f, "\n--- Reminders ---")?;
            for reminder in &self.reminders {
                writeln!(f, "{reminder}")?;
            }
        }

        write!(f, "{rule}")
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Product Catalog ---")?;
        for product in &self.catalog {
            writeln!(f, "{product}")?;
        }

        for account in &self.accounts {
            writeln!(f, "\n{account}")?;
        }
        Ok(())
    }
}
