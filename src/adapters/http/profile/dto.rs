//! HTTP DTOs for profile endpoints.
//!
//! These types define the JSON response structure for the profile API.

use serde::Serialize;

use crate::domain::profile::Profile;

/// Response for profile initialization.
#[derive(Debug, Clone, Serialize)]
pub struct InitProfileResponse {
    /// Outcome message.
    pub message: String,
    /// The caller's profile (existing or freshly created).
    pub profile: ProfileResponse,
}

/// Profile view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    /// Profile ID.
    pub id: String,
    /// Owning user ID.
    pub user_id: String,
    /// Whether the profile is currently bookable.
    pub available: bool,
    /// Locations the profile serves.
    pub locations: Vec<String>,
    /// Listed skills.
    pub skills: Vec<String>,
    /// Image references.
    pub images: Vec<String>,
    /// When the profile was created (ISO 8601).
    pub created_at: String,
    /// Last modification time (ISO 8601).
    pub updated_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            available: profile.available,
            locations: profile.locations,
            skills: profile.skills,
            images: profile.images,
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};

    #[test]
    fn profile_response_carries_all_fields() {
        let mut profile = Profile::create(UserId::new("user-123").unwrap(), Timestamp::now());
        profile.locations.push("Berlin".to_string());

        let response = ProfileResponse::from(profile.clone());

        assert_eq!(response.id, profile.id.to_string());
        assert_eq!(response.user_id, "user-123");
        assert!(response.available);
        assert_eq!(response.locations, vec!["Berlin".to_string()]);
        assert!(response.skills.is_empty());
    }
}
