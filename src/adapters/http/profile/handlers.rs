//! HTTP handlers for profile endpoints.
//!
//! These handlers connect axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::profile::{InitProfileCommand, InitProfileHandler};
use crate::domain::foundation::DomainError;
use crate::ports::ProfileRepository;

use super::dto::{ErrorResponse, InitProfileResponse, ProfileResponse};

/// Shared application state for profile routes.
#[derive(Clone)]
pub struct ProfileAppState {
    pub profile_repository: Arc<dyn ProfileRepository>,
}

impl ProfileAppState {
    pub fn init_profile_handler(&self) -> InitProfileHandler {
        InitProfileHandler::new(self.profile_repository.clone())
    }
}

/// POST /api/profile-init - Find or create the caller's profile.
pub async fn init_profile(
    State(state): State<ProfileAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse + std::fmt::Debug, ProfileApiError> {
    let handler = state.init_profile_handler();
    let cmd = InitProfileCommand { user_id: user.id };

    let result = handler.handle(cmd).await?;

    let message = if result.created {
        "Profile created"
    } else {
        "Profile already exists"
    };

    let response = InitProfileResponse {
        message: message.to_string(),
        profile: ProfileResponse::from(result.profile),
    };

    Ok(Json(response))
}

/// API error type that converts domain errors to HTTP responses.
///
/// Profile errors never leak internals: everything unexpected is a
/// generic 500 and the detail goes to the log.
#[derive(Debug)]
pub struct ProfileApiError(DomainError);

impl From<DomainError> for ProfileApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProfileApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self.0, "Profile request failed");

        let body = ErrorResponse::new("INTERNAL_ERROR", "Internal server error");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
