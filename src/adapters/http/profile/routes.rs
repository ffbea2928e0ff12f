//! Axum router configuration for profile endpoints.

use axum::{routing::post, Router};

use super::handlers::{init_profile, ProfileAppState};

/// Create the profile API router.
///
/// # Routes
/// - `POST /profile-init` - Find or create the caller's profile
///
/// Mount under `/api`.
pub fn profile_routes() -> Router<ProfileAppState> {
    Router::new().route("/profile-init", post(init_profile))
}
