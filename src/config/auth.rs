//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (session tokens)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the session provider
    pub session_secret: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Session tokens are verified with HS256, so the secret must carry
    /// enough entropy to resist brute forcing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_secret.is_empty() {
            return Err(ValidationError::MissingValue("auth.session_secret"));
        }
        if self.session_secret.len() < 32 {
            return Err(ValidationError::WeakSessionSecret(32));
        }
        Ok(())
    }
}
