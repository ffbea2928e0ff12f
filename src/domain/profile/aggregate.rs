//! Profile aggregate entity.
//!
//! A Profile is a user's public, bookable presence on the platform.
//! Each user has at most one Profile (unique constraint on user_id at the
//! database level). Profiles are created lazily on first use.

use crate::domain::foundation::{ProfileId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Profile aggregate - a user's public profile.
///
/// # Invariants
///
/// - `user_id` is unique (one profile per user)
/// - A freshly created profile is available with empty relation lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for this profile.
    pub id: ProfileId,

    /// User who owns this profile.
    pub user_id: UserId,

    /// Whether the profile is visible and bookable.
    pub available: bool,

    /// Locations the profile serves.
    pub locations: Vec<String>,

    /// Skills listed on the profile.
    pub skills: Vec<String>,

    /// Image references attached to the profile.
    pub images: Vec<String>,

    /// When the profile was created.
    pub created_at: Timestamp,

    /// When the profile was last updated.
    pub updated_at: Timestamp,
}

impl Profile {
    /// Create a fresh profile for a user with default settings.
    ///
    /// New profiles start available with empty locations, skills, and images.
    pub fn create(user_id: UserId, now: Timestamp) -> Self {
        Self {
            id: ProfileId::new(),
            user_id,
            available: true,
            locations: Vec::new(),
            skills: Vec::new(),
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
