//! HTTP handlers for studio endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::studio::{CheckStudioAccessHandler, CheckStudioAccessQuery};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::StudioAccessReader;

use super::dto::{CheckAccessResponse, ErrorResponse};

/// Shared application state for studio routes.
#[derive(Clone)]
pub struct StudioAppState {
    pub studio_reader: Arc<dyn StudioAccessReader>,
}

impl StudioAppState {
    pub fn check_access_handler(&self) -> CheckStudioAccessHandler {
        CheckStudioAccessHandler::new(self.studio_reader.clone())
    }
}

/// GET /api/studio/check-access - Verify the caller belongs to a studio tenant.
pub async fn check_access(
    State(state): State<StudioAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse + std::fmt::Debug, StudioApiError> {
    let handler = state.check_access_handler();
    let query = CheckStudioAccessQuery { user_id: user.id };

    let descriptor = handler.handle(query).await?;

    Ok(Json(CheckAccessResponse::ok(descriptor)))
}

/// API error type that converts domain errors to HTTP responses.
///
/// Unlike the other endpoints, the 500 branch here includes the error's
/// display form in the body; clients of this route expect it.
pub struct StudioApiError(DomainError);

impl From<DomainError> for StudioApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StudioApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match self.0.code() {
            ErrorCode::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorCode::StudioNotFound | ErrorCode::NotFound => {
                (StatusCode::NOT_FOUND, "STUDIO_NOT_FOUND")
            }
            _ => {
                tracing::error!(error = %self.0, "Studio access check failed");
                let body = ErrorResponse::new(
                    "INTERNAL_ERROR",
                    format!("Internal server error: {}", self.0),
                );
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ErrorResponse::new(code, self.0.message());
        (status, Json(body)).into_response()
    }
}
