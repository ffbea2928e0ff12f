//! HS256 session token adapter for JWT validation.
//!
//! This adapter implements the `SessionValidator` port against the session
//! tokens minted by the web frontend's auth layer. It validates tokens by:
//!
//! 1. Verifying the HMAC signature against the shared session secret
//! 2. Validating the expiry claim
//! 3. Mapping claims to the domain `AuthenticatedUser` type

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT session validator.
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared secret used to sign session tokens.
    pub secret: SecretString,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }
}

/// Claims carried by a session token.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    /// Subject - the user ID
    sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    #[allow(dead_code)]
    exp: i64,

    /// User's email address
    #[serde(default)]
    email: Option<String>,

    /// User's display name
    #[serde(default)]
    name: Option<String>,
}

/// HS256 session validator.
///
/// This is the production implementation of `SessionValidator`.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());
        Self { decoding_key }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::debug!("Session token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;
        let claims = token_data.claims;

        // Email is required by the domain
        let email = claims.email.ok_or_else(|| {
            tracing::warn!("Session token missing email claim");
            AuthError::InvalidToken
        })?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid user ID in session token: {}", claims.sub);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, email, claims.name))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    const TEST_SECRET: &str = "test-session-secret";

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    fn make_validator() -> JwtSessionValidator {
        JwtSessionValidator::new(JwtConfig::new(SecretString::new(TEST_SECRET.to_string())))
    }

    fn sign(claims: &TestClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Validation Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn accepts_valid_token() {
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: future_exp(),
                email: Some("alice@example.com".to_string()),
                name: Some("Alice".to_string()),
            },
            TEST_SECRET,
        );

        let user = make_validator().validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.display_name, Some("Alice".to_string()));
    }

    #[tokio::test]
    async fn accepts_token_without_name() {
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: future_exp(),
                email: Some("alice@example.com".to_string()),
                name: None,
            },
            TEST_SECRET,
        );

        let user = make_validator().validate(&token).await.unwrap();
        assert_eq!(user.display_name, None);
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: chrono::Utc::now().timestamp() - 3600,
                email: Some("alice@example.com".to_string()),
                name: None,
            },
            TEST_SECRET,
        );

        let result = make_validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn rejects_token_signed_with_wrong_secret() {
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: future_exp(),
                email: Some("alice@example.com".to_string()),
                name: None,
            },
            "some-other-secret",
        );

        let result = make_validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn rejects_token_missing_email() {
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: future_exp(),
                email: None,
                name: None,
            },
            TEST_SECRET,
        );

        let result = make_validator().validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let result = make_validator().validate("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn jwt_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtSessionValidator>();
    }
}
