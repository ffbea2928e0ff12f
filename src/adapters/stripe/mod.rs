//! Stripe adapters - billing provider integration.

mod billing_adapter;
mod mock_billing_provider;
mod types;

pub use billing_adapter::{StripeBillingAdapter, StripeConfig};
pub use mock_billing_provider::MockBillingProvider;
