//! Payment reminders
//!
//! Reminders are composed, not delivered: the caller decides what to do
//! with the message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How pressing a reminder is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Payment is pending and not yet due
    Standard,
    /// Payment was processed after its due date
    Urgent,
    /// Nothing is owed that a reminder would help with
    NotNeeded,
}

/// A composed reminder for one payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub message: String,
}

impl Reminder {
    /// Returns true if this reminder should reach the policyholder
    pub fn is_needed(&self) -> bool {
        self.kind != ReminderKind::NotNeeded
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
