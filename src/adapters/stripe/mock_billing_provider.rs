//! Mock billing provider for testing.
//!
//! Provides a configurable mock implementation of `BillingProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured subscriptions
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{BillingError, BillingProvider, RemoteSubscription, UpdateSubscriptionRequest};

/// Mock billing provider.
///
/// # Example
///
/// ```ignore
/// let mock = MockBillingProvider::new();
/// mock.set_subscription(RemoteSubscription { id: "sub_123".into(), ... });
///
/// let result = mock.update_subscription("sub_123", request).await;
/// assert_eq!(mock.update_calls().len(), 1);
/// ```
#[derive(Default)]
pub struct MockBillingProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Pre-configured subscriptions by remote ID.
    subscriptions: HashMap<String, RemoteSubscription>,

    /// Error to return on every call.
    next_error: Option<BillingError>,

    /// Recorded update calls for assertions.
    update_calls: Vec<RecordedUpdate>,
}

/// Recorded update call for assertions.
#[derive(Debug, Clone)]
pub struct RecordedUpdate {
    pub remote_id: String,
    pub cancel_at_period_end: bool,
    pub idempotency_key: Option<String>,
}

impl MockBillingProvider {
    /// Create a new mock provider with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a remote subscription the mock knows about.
    pub fn set_subscription(&self, subscription: RemoteSubscription) {
        self.inner
            .lock()
            .unwrap()
            .subscriptions
            .insert(subscription.id.clone(), subscription);
    }

    /// Builder form of `set_subscription`.
    pub fn with_subscription(self, subscription: RemoteSubscription) -> Self {
        self.set_subscription(subscription);
        self
    }

    /// Make every call fail with the given error.
    pub fn set_error(&self, error: BillingError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Builder form of `set_error`.
    pub fn with_error(self, error: BillingError) -> Self {
        self.set_error(error);
        self
    }

    /// Returns all recorded update calls.
    pub fn update_calls(&self) -> Vec<RecordedUpdate> {
        self.inner.lock().unwrap().update_calls.clone()
    }
}

#[async_trait]
impl BillingProvider for MockBillingProvider {
    async fn update_subscription(
        &self,
        remote_id: &str,
        request: UpdateSubscriptionRequest,
    ) -> Result<RemoteSubscription, BillingError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.next_error.clone() {
            return Err(error);
        }

        state.update_calls.push(RecordedUpdate {
            remote_id: remote_id.to_string(),
            cancel_at_period_end: request.cancel_at_period_end,
            idempotency_key: request.idempotency_key.clone(),
        });

        let subscription = state
            .subscriptions
            .get_mut(remote_id)
            .ok_or_else(|| BillingError::not_found("Subscription"))?;
        subscription.cancel_at_period_end = request.cancel_at_period_end;

        Ok(subscription.clone())
    }

    async fn get_subscription(
        &self,
        remote_id: &str,
    ) -> Result<Option<RemoteSubscription>, BillingError> {
        let state = self.inner.lock().unwrap();

        if let Some(error) = state.next_error.clone() {
            return Err(error);
        }

        Ok(state.subscriptions.get(remote_id).cloned())
    }
}
