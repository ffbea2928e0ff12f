//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a session token.
//! They have no provider dependencies; any session provider can populate them
//! via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the session provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by the `SessionValidator` adapter after successfully
    /// validating a session token.
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
        }
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Authentication errors that can occur during session validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired session")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Session expired")]
    TokenExpired,

    /// The session provider is unavailable (network, config, etc.).
    #[error("Session provider unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
