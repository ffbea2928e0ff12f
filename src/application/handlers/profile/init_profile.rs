//! InitProfileHandler - idempotent find-or-create for user profiles.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Command to initialize the caller's profile.
#[derive(Debug, Clone)]
pub struct InitProfileCommand {
    pub user_id: UserId,
}

/// Result of profile initialization.
#[derive(Debug, Clone)]
pub struct InitProfileResult {
    pub profile: Profile,
    /// True when this call created the profile, false when one already existed.
    pub created: bool,
}

/// Handler for profile initialization.
///
/// Create-if-absent: calling twice for the same user returns the same
/// profile and writes at most one row.
pub struct InitProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl InitProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: InitProfileCommand) -> Result<InitProfileResult, DomainError> {
        if let Some(existing) = self.repository.find_by_user(&cmd.user_id).await? {
            return Ok(InitProfileResult {
                profile: existing,
                created: false,
            });
        }

        let profile = Profile::create(cmd.user_id, Timestamp::now());
        self.repository.create(&profile).await?;

        Ok(InitProfileResult {
            profile,
            created: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileRepository {
        profiles: Mutex<Vec<Profile>>,
        fail_create: bool,
    }

    impl MockProfileRepository {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }

        fn with_profile(profile: Profile) -> Self {
            Self {
                profiles: Mutex::new(vec![profile]),
                fail_create: false,
            }
        }

        fn failing_create() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                fail_create: true,
            }
        }

        fn count(&self) -> usize {
            self.profiles.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.user_id == user_id)
                .cloned())
        }

        async fn create(&self, profile: &Profile) -> Result<(), DomainError> {
            if self.fail_create {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated insert failure",
                ));
            }
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    #[tokio::test]
    async fn creates_profile_when_absent() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = InitProfileHandler::new(repo.clone());

        let result = handler
            .handle(InitProfileCommand {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(result.created);
        assert!(result.profile.available);
        assert!(result.profile.locations.is_empty());
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn returns_existing_profile_without_creating() {
        let existing = Profile::create(test_user_id(), Timestamp::now());
        let repo = Arc::new(MockProfileRepository::with_profile(existing.clone()));
        let handler = InitProfileHandler::new(repo.clone());

        let result = handler
            .handle(InitProfileCommand {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(!result.created);
        assert_eq!(result.profile.id, existing.id);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn second_call_returns_same_profile() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = InitProfileHandler::new(repo.clone());
        let cmd = InitProfileCommand {
            user_id: test_user_id(),
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.profile.id, second.profile.id);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn propagates_persistence_failure() {
        let repo = Arc::new(MockProfileRepository::failing_create());
        let handler = InitProfileHandler::new(repo);

        let result = handler
            .handle(InitProfileCommand {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), ErrorCode::DatabaseError);
    }
}
