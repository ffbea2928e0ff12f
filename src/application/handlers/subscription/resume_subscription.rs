//! ResumeSubscriptionHandler - clears a pending period-end cancellation.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{BillingProvider, SubscriptionRepository, UpdateSubscriptionRequest};

/// Command to resume a subscription that is pending cancellation.
#[derive(Debug, Clone)]
pub struct ResumeSubscriptionCommand {
    pub user_id: UserId,
}

/// Result of a successful resume request.
#[derive(Debug, Clone)]
pub struct ResumeSubscriptionResult {
    pub subscription: Subscription,
}

/// Handler for resuming a subscription before its cancellation takes effect.
///
/// Mirrors cancellation: remote mutation first, then the local flag.
pub struct ResumeSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
    billing: Arc<dyn BillingProvider>,
}

impl ResumeSubscriptionHandler {
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
        cmd: ResumeSubscriptionCommand,
    ) -> Result<ResumeSubscriptionResult, SubscriptionError> {
        let mut subscription = self
            .repository
            .find_pending_cancellation_by_user(&cmd.user_id)
            .await
            .map_err(SubscriptionError::from)?
            .ok_or_else(|| SubscriptionError::NotFoundForUser(cmd.user_id.clone()))?;

        let remote_id = subscription
            .remote_id
            .clone()
            .ok_or(SubscriptionError::MissingRemoteId)?;

        let request = UpdateSubscriptionRequest::with_idempotency_key(
            false,
            format!("{}:resume", subscription.id),
        );
        self.billing.update_subscription(&remote_id, request).await?;

        subscription.resume(Timestamp::now())?;

        if let Err(e) = self.repository.update(&subscription).await {
            tracing::error!(
                subscription_id = %subscription.id,
                remote_id = %remote_id,
                error = %e,
                "Local write failed after remote resume; flag diverges until retried"
            );
            return Err(e.into());
        }

        tracing::info!(
            subscription_id = %subscription.id,
            user_id = %cmd.user_id,
            "Subscription cancellation reverted"
        );

        Ok(ResumeSubscriptionResult { subscription })
    }
}
