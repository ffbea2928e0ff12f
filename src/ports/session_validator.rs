//! Session validation port.
//!
//! The seam between this service and the external session provider.
//! Whatever issues the session token (NextAuth, Auth0, a mock in tests),
//! the middleware and handlers only see this trait.

use crate::domain::foundation::{AuthenticatedUser, AuthError};
use async_trait::async_trait;

/// Port for validating incoming session tokens.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validates a session token and returns the authenticated user.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` / `TokenExpired` when the caller must re-authenticate
    /// - `ServiceUnavailable` when the provider cannot be reached
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
