//! Subscription repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Port for subscription persistence.
///
/// The two finders encode the guards of the cancel and resume operations so
/// the store filters rows rather than the handlers re-checking status.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Finds the user's subscription with status active or trialing.
    async fn find_cancellable_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Finds the user's subscription with a pending period-end cancellation.
    async fn find_pending_cancellation_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Writes an updated subscription row back to the store.
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;
}
