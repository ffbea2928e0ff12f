//! HTTP handlers for subscription endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::subscription::{
    CancelSubscriptionCommand, CancelSubscriptionHandler, ResumeSubscriptionCommand,
    ResumeSubscriptionHandler,
};
use crate::domain::subscription::SubscriptionError;
use crate::ports::{BillingProvider, SubscriptionRepository};

use super::dto::{ErrorResponse, MessageResponse};

/// Shared application state for subscription routes.
#[derive(Clone)]
pub struct SubscriptionAppState {
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub billing_provider: Arc<dyn BillingProvider>,
}

impl SubscriptionAppState {
    pub fn cancel_handler(&self) -> CancelSubscriptionHandler {
        CancelSubscriptionHandler::new(
            self.subscription_repository.clone(),
            self.billing_provider.clone(),
        )
    }

    pub fn resume_handler(&self) -> ResumeSubscriptionHandler {
        ResumeSubscriptionHandler::new(
            self.subscription_repository.clone(),
            self.billing_provider.clone(),
        )
    }
}

/// POST /api/user/subscription/cancel - Schedule cancellation at period end.
pub async fn cancel_subscription(
    State(state): State<SubscriptionAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse + std::fmt::Debug, SubscriptionApiError> {
    let handler = state.cancel_handler();
    let cmd = CancelSubscriptionCommand { user_id: user.id };

    handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new(
        "Subscription will be canceled at the end of the billing period",
    )))
}

/// POST /api/user/subscription/resume - Revert a pending cancellation.
pub async fn resume_subscription(
    State(state): State<SubscriptionAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse + std::fmt::Debug, SubscriptionApiError> {
    let handler = state.resume_handler();
    let cmd = ResumeSubscriptionCommand { user_id: user.id };

    handler.handle(cmd).await?;

    Ok(Json(MessageResponse::new("Subscription resumed")))
}

/// API error type that converts subscription errors to HTTP responses.
pub struct SubscriptionApiError(SubscriptionError);

impl From<SubscriptionError> for SubscriptionApiError {
    fn from(err: SubscriptionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for SubscriptionApiError {
    fn into_response(self) -> axum::response::Response {
        if self.0.is_not_found() {
            let body = ErrorResponse::new("SUBSCRIPTION_NOT_FOUND", "No subscription found");
            return (StatusCode::NOT_FOUND, Json(body)).into_response();
        }

        tracing::error!(error = %self.0, "Subscription request failed");
        let body = ErrorResponse::new("INTERNAL_ERROR", "Internal server error");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
