//! Billing provider port for the external billing API.
//!
//! Defines the contract for billing gateway integrations (e.g. Stripe).
//! The service only mutates existing remote subscriptions; provisioning and
//! webhooks live with the billing provider itself.
//!
//! # Design
//!
//! - **Gateway agnostic**: interface works with any subscription billing API
//! - **Idempotent**: mutating calls carry an idempotency key so retries are safe

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::subscription::{SubscriptionError, SubscriptionStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for billing provider integrations.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Updates a remote subscription's period-end cancellation flag.
    ///
    /// Returns the provider's view of the subscription after the update.
    async fn update_subscription(
        &self,
        remote_id: &str,
        request: UpdateSubscriptionRequest,
    ) -> Result<RemoteSubscription, BillingError>;

    /// Fetches a remote subscription by provider id.
    async fn get_subscription(
        &self,
        remote_id: &str,
    ) -> Result<Option<RemoteSubscription>, BillingError>;
}

/// Request to update a remote subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    /// Desired value of the period-end cancellation flag.
    pub cancel_at_period_end: bool,

    /// Idempotency key for safe retries.
    pub idempotency_key: Option<String>,
}

impl UpdateSubscriptionRequest {
    /// Builds a request with a deterministic idempotency key.
    pub fn with_idempotency_key(cancel_at_period_end: bool, key: impl Into<String>) -> Self {
        Self {
            cancel_at_period_end,
            idempotency_key: Some(key.into()),
        }
    }
}

/// Subscription as reported by the billing provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSubscription {
    /// Provider's subscription id.
    pub id: String,

    /// Current subscription status.
    pub status: SubscriptionStatus,

    /// Whether the subscription cancels at period end.
    pub cancel_at_period_end: bool,

    /// Current billing period end (Unix timestamp).
    pub current_period_end: i64,

    /// When cancellation was requested (if applicable).
    pub canceled_at: Option<i64>,
}

/// Errors from billing provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingError {
    /// Error code for categorization.
    pub code: BillingErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl BillingError {
    /// Create a new billing error.
    pub fn new(code: BillingErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Attach the provider's own error code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BillingErrorCode::NetworkError, message)
    }

    /// Create a not found error.
    pub fn not_found(resource: &str) -> Self {
        Self::new(BillingErrorCode::NotFound, format!("{} not found", resource))
    }

    /// Create a generic provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(BillingErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BillingError {}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        let code = match err.code {
            BillingErrorCode::NotFound => ErrorCode::NotFound,
            BillingErrorCode::NetworkError => ErrorCode::ExternalServiceError,
            _ => ErrorCode::BillingProviderError,
        };
        DomainError::new(code, err.message)
    }
}

impl From<BillingError> for SubscriptionError {
    fn from(err: BillingError) -> Self {
        SubscriptionError::Billing(err.to_string())
    }
}

/// Billing error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,

    /// Unknown error.
    Unknown,
}

impl BillingErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BillingErrorCode::NetworkError | BillingErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for BillingErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BillingErrorCode::NetworkError => "network_error",
            BillingErrorCode::AuthenticationError => "authentication_error",
            BillingErrorCode::NotFound => "not_found",
            BillingErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            BillingErrorCode::ProviderError => "provider_error",
            BillingErrorCode::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
