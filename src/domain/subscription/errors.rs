//! Subscription-specific error type.

use crate::domain::foundation::{DomainError, UserId};
use thiserror::Error;

/// Errors from subscription lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum SubscriptionError {
    /// No subscription row matched the operation's guard for this user.
    #[error("No matching subscription found for user {0}")]
    NotFoundForUser(UserId),

    /// The local row has no remote billing identifier to act on.
    #[error("Subscription has no remote billing identifier")]
    MissingRemoteId,

    /// The subscription is not in a state that allows the transition.
    #[error("Invalid subscription state ({status}): {reason}")]
    InvalidState { status: String, reason: String },

    /// The billing provider rejected or failed the remote mutation.
    #[error("Billing provider error: {0}")]
    Billing(String),

    /// Persistence or other domain-level failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SubscriptionError {
    /// Creates an invalid state error.
    pub fn invalid_state(status: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            status: status.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error maps to a caller-correctable 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SubscriptionError::NotFoundForUser(_) | SubscriptionError::MissingRemoteId
        )
    }
}
