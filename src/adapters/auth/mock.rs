//! In-memory session validator used by tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// `SessionValidator` backed by a fixed token table instead of signed tokens.
///
/// Unknown tokens come back as `InvalidToken`. A forced error, once set,
/// wins over every lookup, which is how provider outages are simulated.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    state: Mutex<MockState>,
}

#[derive(Debug, Default)]
struct MockState {
    sessions: HashMap<String, AuthenticatedUser>,
    outage: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` for the given user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.state
            .lock()
            .unwrap()
            .sessions
            .insert(token.into(), user);
        self
    }

    /// Accept `token` for a synthetic user derived from `user_id`.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            format!("{user_id}@test.example.com"),
            None,
        );
        self.with_user(token, user)
    }

    /// Fail every validation with `error`, regardless of the token.
    pub fn with_error(self, error: AuthError) -> Self {
        self.state.lock().unwrap().outage = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let state = self.state.lock().unwrap();
        if let Some(error) = &state.outage {
            return Err(error.clone());
        }
        state
            .sessions
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
