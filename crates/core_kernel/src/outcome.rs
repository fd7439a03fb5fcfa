//! Outcomes of lifecycle operations
//!
//! Asking an entity to do something its current status does not allow is
//! ordinary control flow here: the entity stays untouched and explains why.
//! Every lifecycle operation therefore returns an [`Outcome`] rather than a
//! `Result`.

use thiserror::Error;

/// The result of a lifecycle operation on an entity
#[must_use = "a rejected operation leaves the entity unchanged"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation changed the entity
    Applied,
    /// The operation was declined; the entity is unchanged
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Returns the rejection reason, if the operation was declined
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(reason: Rejection) -> Self {
        Outcome::Rejected(reason)
    }
}

/// Why an operation was declined
///
/// Status values are carried in their rendered form so the kernel stays
/// independent of the domain status enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The entity is already in the requested status
    #[error("already {0}")]
    AlreadyInStatus(String),

    /// The requested transition is not allowed from the current status
    #[error("cannot {action} from status {from}")]
    InvalidTransition {
        action: &'static str,
        from: String,
    },

    /// The referenced id is already associated with the entity
    #[error("{0} is already associated")]
    AlreadyAssociated(String),

    /// The payment has already been paid
    #[error("payment is already paid")]
    AlreadySettled,

    /// A penalty has already been folded into the amount
    #[error("penalty has already been applied")]
    PenaltyAlreadyApplied,

    #[error("amount must not be negative: {0}")]
    NegativeAmount(String),

    #[error("rate must not be negative: {0}")]
    NegativeRate(String),

    /// The result of the calculation does not fit in an amount
    #[error("amount out of range: {0}")]
    AmountOutOfRange(String),

    /// The update did not carry any recognized field
    #[error("no fields to update")]
    NoFieldsUpdated,
}

impl Rejection {
    pub fn invalid_transition(action: &'static str, from: impl ToString) -> Self {
        Rejection::InvalidTransition {
            action,
            from: from.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_has_no_rejection() {
        let outcome = Outcome::Applied;
        assert!(outcome.is_applied());
        assert!(!outcome.is_rejected());
        assert_eq!(outcome.rejection(), None);
    }

    #[test]
    fn test_rejection_converts_into_outcome() {
        let outcome: Outcome = Rejection::AlreadySettled.into();
        assert!(outcome.is_rejected());
        assert_eq!(outcome.rejection(), Some(&Rejection::AlreadySettled));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::invalid_transition("suspend", "pending_creation").to_string(),
            "cannot suspend from status pending_creation"
        );
        assert_eq!(Rejection::AlreadyInStatus("active".into()).to_string(), "already active");
        assert_eq!(
            Rejection::AlreadyAssociated("PRD-1".into()).to_string(),
            "PRD-1 is already associated"
        );
    }
}
