//! Stripe API response types.
//!
//! Only the fields this service reads are deserialized; Stripe responses
//! carry far more.

use serde::Deserialize;

use crate::domain::subscription::SubscriptionStatus;
use crate::ports::RemoteSubscription;

/// Subscription object as returned by the Stripe API.
#[derive(Debug, Deserialize)]
pub(super) struct StripeSubscription {
    pub id: String,
    pub status: String,
    pub cancel_at_period_end: bool,
    pub current_period_end: i64,
    #[serde(default)]
    pub canceled_at: Option<i64>,
}

impl From<StripeSubscription> for RemoteSubscription {
    fn from(sub: StripeSubscription) -> Self {
        RemoteSubscription {
            id: sub.id,
            status: SubscriptionStatus::from_provider(&sub.status),
            cancel_at_period_end: sub.cancel_at_period_end,
            current_period_end: sub.current_period_end,
            canceled_at: sub.canceled_at,
        }
    }
}

/// Error envelope returned by the Stripe API.
#[derive(Debug, Deserialize)]
pub(super) struct StripeErrorResponse {
    pub error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct StripeErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
