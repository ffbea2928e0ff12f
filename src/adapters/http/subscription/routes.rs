//! Axum router configuration for subscription endpoints.

use axum::{routing::post, Router};

use super::handlers::{cancel_subscription, resume_subscription, SubscriptionAppState};

/// Create the subscription API router.
///
/// # Routes
/// - `POST /user/subscription/cancel` - Schedule cancellation at period end
/// - `POST /user/subscription/resume` - Revert a pending cancellation
///
/// Mount under `/api`.
pub fn subscription_routes() -> Router<SubscriptionAppState> {
    Router::new()
        .route("/user/subscription/cancel", post(cancel_subscription))
        .route("/user/subscription/resume", post(resume_subscription))
}
