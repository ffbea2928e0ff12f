//! PostgreSQL implementation of ProfileRepository.
//!
//! Profile list attributes (locations, skills, images) live in child tables
//! and are loaded eagerly with the profile row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of the ProfileRepository port.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_list(&self, table: ListTable, profile_id: Uuid) -> Result<Vec<String>, DomainError> {
        let rows: Vec<(String,)> = sqlx::query_as(table.select_sql())
            .bind(profile_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to load profile {}: {}", table.name(), e),
                )
            })?;

        Ok(rows.into_iter().map(|(value,)| value).collect())
    }
}

/// Profile child tables share a (profile_id, position, value) shape.
#[derive(Clone, Copy)]
enum ListTable {
    Locations,
    Skills,
    Images,
}

impl ListTable {
    fn name(self) -> &'static str {
        match self {
            ListTable::Locations => "locations",
            ListTable::Skills => "skills",
            ListTable::Images => "images",
        }
    }

    fn select_sql(self) -> &'static str {
        match self {
            ListTable::Locations => {
                "SELECT value FROM profile_locations WHERE profile_id = $1 ORDER BY position"
            }
            ListTable::Skills => {
                "SELECT value FROM profile_skills WHERE profile_id = $1 ORDER BY position"
            }
            ListTable::Images => {
                "SELECT value FROM profile_images WHERE profile_id = $1 ORDER BY position"
            }
        }
    }

    fn insert_sql(self) -> &'static str {
        match self {
            ListTable::Locations => {
                "INSERT INTO profile_locations (profile_id, position, value) VALUES ($1, $2, $3)"
            }
            ListTable::Skills => {
                "INSERT INTO profile_skills (profile_id, position, value) VALUES ($1, $2, $3)"
            }
            ListTable::Images => {
                "INSERT INTO profile_images (profile_id, position, value) VALUES ($1, $2, $3)"
            }
        }
    }
}

/// Database row representation of a profile.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: String,
    available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(
        self,
        locations: Vec<String>,
        skills: Vec<String>,
        images: Vec<String>,
    ) -> Result<Profile, DomainError> {
        Ok(Profile {
            id: ProfileId::from_uuid(self.id),
            user_id: UserId::new(&self.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            available: self.available,
            locations,
            skills,
            images,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, available, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find profile: {}", e))
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let locations = self.load_list(ListTable::Locations, row.id).await?;
        let skills = self.load_list(ListTable::Skills, row.id).await?;
        let images = self.load_list(ListTable::Images, row.id).await?;

        Ok(Some(row.into_profile(locations, skills, images)?))
    }

    async fn create(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to begin transaction: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, available, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(profile.user_id.as_str())
        .bind(profile.available)
        .bind(profile.created_at.as_datetime())
        .bind(profile.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create profile: {}", e))
        })?;

        let lists = [
            (ListTable::Locations, &profile.locations),
            (ListTable::Skills, &profile.skills),
            (ListTable::Images, &profile.images),
        ];
        for (table, values) in lists {
            for (position, value) in values.iter().enumerate() {
                sqlx::query(table.insert_sql())
                    .bind(profile.id.as_uuid())
                    .bind(position as i32)
                    .bind(value)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        DomainError::new(
                            ErrorCode::DatabaseError,
                            format!("Failed to insert profile {}: {}", table.name(), e),
                        )
                    })?;
            }
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to commit profile: {}", e))
        })?;

        Ok(())
    }
}
