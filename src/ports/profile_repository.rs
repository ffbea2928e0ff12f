//! Profile repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;
use async_trait::async_trait;

/// Port for profile persistence.
///
/// Profiles load eagerly with their locations, skills, and images; the
/// one-per-user invariant is a unique constraint in the store.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds a user's profile, including its relation lists.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Persists a freshly created profile.
    async fn create(&self, profile: &Profile) -> Result<(), DomainError>;
}
