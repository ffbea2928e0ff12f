//! Stripe billing provider adapter.
//!
//! Implements the `BillingProvider` port against the Stripe subscriptions API.
//! Mutations carry an `Idempotency-Key` header so a retried request after a
//! partial failure does not repeat the side effect.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key);
//! let adapter = StripeBillingAdapter::new(config);
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{BillingError, BillingErrorCode, BillingProvider, RemoteSubscription, UpdateSubscriptionRequest};

use super::types::{StripeErrorResponse, StripeSubscription};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe billing provider adapter.
pub struct StripeBillingAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeBillingAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn subscription_url(&self, remote_id: &str) -> String {
        format!("{}/v1/subscriptions/{}", self.config.api_base_url, remote_id)
    }

    /// Map a non-success Stripe response to a `BillingError`.
    async fn error_from_response(response: reqwest::Response) -> BillingError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let provider_code = serde_json::from_str::<StripeErrorResponse>(&body)
            .ok()
            .and_then(|e| e.error.code);

        let code = match status {
            StatusCode::NOT_FOUND => BillingErrorCode::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BillingErrorCode::AuthenticationError
            }
            StatusCode::TOO_MANY_REQUESTS => BillingErrorCode::RateLimitExceeded,
            _ => BillingErrorCode::ProviderError,
        };

        let mut error = BillingError::new(code, format!("Stripe API error ({}): {}", status, body));
        if let Some(provider_code) = provider_code {
            error = error.with_provider_code(provider_code);
        }
        error
    }
}

#[async_trait]
impl BillingProvider for StripeBillingAdapter {
    async fn update_subscription(
        &self,
        remote_id: &str,
        request: UpdateSubscriptionRequest,
    ) -> Result<RemoteSubscription, BillingError> {
        let flag = if request.cancel_at_period_end {
            "true"
        } else {
            "false"
        };

        let mut http_request = self
            .http_client
            .post(self.subscription_url(remote_id))
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&[("cancel_at_period_end", flag)]);

        if let Some(key) = &request.idempotency_key {
            http_request = http_request.header("Idempotency-Key", key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| BillingError::network(e.to_string()))?;

        if !response.status().is_success() {
            let error = Self::error_from_response(response).await;
            tracing::warn!(
                remote_id = %remote_id,
                error = %error,
                "Stripe subscription update failed"
            );
            return Err(error);
        }

        let stripe_sub: StripeSubscription = response
            .json()
            .await
            .map_err(|e| BillingError::provider(format!("Failed to parse Stripe response: {}", e)))?;

        Ok(stripe_sub.into())
    }

    async fn get_subscription(
        &self,
        remote_id: &str,
    ) -> Result<Option<RemoteSubscription>, BillingError> {
        let response = self
            .http_client
            .get(self.subscription_url(remote_id))
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| BillingError::network(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let stripe_sub: StripeSubscription = response
            .json()
            .await
            .map_err(|e| BillingError::provider(format!("Failed to parse Stripe response: {}", e)))?;

        Ok(Some(stripe_sub.into()))
    }
}

impl std::fmt::Debug for StripeBillingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeBillingAdapter")
            .field("api_base_url", &self.config.api_base_url)
            .finish_non_exhaustive()
    }
}
