//! Billing configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Billing configuration (Stripe)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingConfig {
    /// Stripe API key
    pub stripe_api_key: String,

    /// Override the Stripe API base URL (for local test servers)
    pub stripe_base_url: Option<String>,
}

impl BillingConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_live_")
    }

    /// Validate billing configuration
    ///
    /// Live keys are rejected outside production so a stray `.env` cannot
    /// mutate real customer subscriptions.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingValue("billing.stripe_api_key"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::BadStripeKey);
        }
        if self.is_live_mode() && *environment != Environment::Production {
            return Err(ValidationError::LiveKeyOutsideProduction);
        }
        Ok(())
    }
}
