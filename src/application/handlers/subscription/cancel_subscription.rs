//! CancelSubscriptionHandler - schedules a period-end cancellation.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{BillingProvider, SubscriptionRepository, UpdateSubscriptionRequest};

/// Command to cancel the caller's subscription at period end.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful cancellation request.
#[derive(Debug, Clone)]
pub struct CancelSubscriptionResult {
    pub subscription: Subscription,
}

/// Handler for subscription cancellation.
///
/// The remote billing mutation runs before the local write; the idempotency
/// key lets a caller retry the whole operation if the local write fails.
pub struct CancelSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
    billing: Arc<dyn BillingProvider>,
}

impl CancelSubscriptionHandler {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        billing: Arc<dyn BillingProvider>,
    ) -> Self {
        Self {
            repository,
            billing,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelSubscriptionCommand,
    ) -> Result<CancelSubscriptionResult, SubscriptionError> {
        let mut subscription = self
            .repository
            .find_cancellable_by_user(&cmd.user_id)
            .await
            .map_err(SubscriptionError::from)?
            .ok_or_else(|| SubscriptionError::NotFoundForUser(cmd.user_id.clone()))?;

        let remote_id = subscription
            .remote_id
            .clone()
            .ok_or(SubscriptionError::MissingRemoteId)?;

        let request = UpdateSubscriptionRequest::with_idempotency_key(
            true,
            format!("{}:cancel", subscription.id),
        );
        self.billing.update_subscription(&remote_id, request).await?;

        subscription.schedule_cancellation(Timestamp::now())?;

        if let Err(e) = self.repository.update(&subscription).await {
            tracing::error!(
                subscription_id = %subscription.id,
                remote_id = %remote_id,
                error = %e,
                "Local write failed after remote cancellation; flag diverges until retried"
            );
            return Err(e.into());
        }

        tracing::info!(
            subscription_id = %subscription.id,
            user_id = %cmd.user_id,
            "Subscription scheduled to cancel at period end"
        );

        Ok(CancelSubscriptionResult { subscription })
    }
}
