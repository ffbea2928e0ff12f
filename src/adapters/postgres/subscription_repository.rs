//! PostgreSQL implementation of SubscriptionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::ports::SubscriptionRepository;

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    user_id: String,
    remote_id: Option<String>,
    status: String,
    cancel_at_period_end: bool,
    current_period_end: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: SubscriptionId::from_uuid(row.id),
            user_id: UserId::new(&row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            remote_id: row.remote_id,
            status: SubscriptionStatus::from_provider(&row.status),
            cancel_at_period_end: row.cancel_at_period_end,
            current_period_end: Timestamp::from_datetime(row.current_period_end),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, remote_id, status, cancel_at_period_end,
           current_period_end, created_at, updated_at
    FROM subscriptions
"#;

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn find_cancellable_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
            "{} WHERE user_id = $1 AND status IN ('active', 'trialing') ORDER BY created_at DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find subscription: {}", e))
        })?;

        row.map(Subscription::try_from).transpose()
    }

    async fn find_pending_cancellation_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
            "{} WHERE user_id = $1 AND cancel_at_period_end = TRUE ORDER BY created_at DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find subscription: {}", e))
        })?;

        row.map(Subscription::try_from).transpose()
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                remote_id = $2,
                status = $3,
                cancel_at_period_end = $4,
                current_period_end = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(&subscription.remote_id)
        .bind(subscription.status.as_provider_str())
        .bind(subscription.cancel_at_period_end)
        .bind(subscription.current_period_end.as_datetime())
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update subscription: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            ));
        }

        Ok(())
    }
}
