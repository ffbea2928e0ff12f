//! Subscription status as mirrored from the billing provider.

use serde::{Deserialize, Serialize};

/// Local mirror of the remote billing subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is paid and current.
    Active,

    /// Subscription is in its trial period.
    Trialing,

    /// Payment failed but within grace period.
    PastDue,

    /// Subscription has been canceled.
    Canceled,

    /// Initial payment incomplete.
    Incomplete,

    /// Unrecognized status from the provider.
    Unknown,
}

impl SubscriptionStatus {
    /// Returns true for statuses eligible for a period-end cancellation.
    ///
    /// Only active and trialing subscriptions can be scheduled for
    /// cancellation; everything else has already left the paying lifecycle.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::Trialing)
    }

    /// Parses a provider status string, mapping unrecognized values to Unknown.
    pub fn from_provider(s: &str) -> Self {
        match s {
            "active" => SubscriptionStatus::Active,
            "trialing" => SubscriptionStatus::Trialing,
            "past_due" => SubscriptionStatus::PastDue,
            "canceled" => SubscriptionStatus::Canceled,
            "incomplete" => SubscriptionStatus::Incomplete,
            _ => SubscriptionStatus::Unknown,
        }
    }

    /// Provider-format string for this status.
    pub fn as_provider_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Incomplete => "incomplete",
            SubscriptionStatus::Unknown => "unknown",
        }
    }
}
