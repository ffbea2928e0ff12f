//! Subscription aggregate entity.
//!
//! A Subscription is the local mirror of a remote billing subscription.
//! Each row corresponds 1:1 to a remote billing object identified by
//! `remote_id`; the `cancel_at_period_end` flag must stay synchronized
//! between the two stores.

use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

use super::{SubscriptionError, SubscriptionStatus};

/// Subscription aggregate - local mirror of a remote billing subscription.
///
/// # Invariants
///
/// - `cancel_at_period_end` flips false -> true only while the status is
///   active or trialing, and true -> false only while set
/// - `updated_at` is refreshed on every flag change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for this subscription row.
    pub id: SubscriptionId,

    /// User who owns this subscription.
    pub user_id: UserId,

    /// Remote billing subscription identifier, when one has been provisioned.
    pub remote_id: Option<String>,

    /// Current lifecycle status, mirrored from the provider.
    pub status: SubscriptionStatus,

    /// Whether the subscription terminates at the end of the current period.
    pub cancel_at_period_end: bool,

    /// End of the current billing period.
    pub current_period_end: Timestamp,

    /// When the row was created.
    pub created_at: Timestamp,

    /// When the row was last updated.
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Schedule this subscription to cancel at the end of the current period.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` unless the status is active or trialing.
    pub fn schedule_cancellation(&mut self, now: Timestamp) -> Result<(), SubscriptionError> {
        if !self.status.is_cancellable() {
            return Err(SubscriptionError::invalid_state(
                self.status.as_provider_str(),
                "only active or trialing subscriptions can be cancelled",
            ));
        }
        self.cancel_at_period_end = true;
        self.updated_at = now;
        Ok(())
    }

    /// Clear a pending period-end cancellation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when no cancellation is pending.
    pub fn resume(&mut self, now: Timestamp) -> Result<(), SubscriptionError> {
        if !self.cancel_at_period_end {
            return Err(SubscriptionError::invalid_state(
                self.status.as_provider_str(),
                "no pending cancellation to resume from",
            ));
        }
        self.cancel_at_period_end = false;
        self.updated_at = now;
        Ok(())
    }
}
