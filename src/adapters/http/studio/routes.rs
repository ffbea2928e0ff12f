//! Axum router configuration for studio endpoints.

use axum::{routing::get, Router};

use super::handlers::{check_access, StudioAppState};

/// Create the studio API router.
///
/// # Routes
/// - `GET /studio/check-access` - Verify the caller belongs to a studio tenant
///
/// Mount under `/api`.
pub fn studio_routes() -> Router<StudioAppState> {
    Router::new().route("/studio/check-access", get(check_access))
}
