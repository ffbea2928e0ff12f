//! PostgreSQL implementation of StudioAccessReader.
//!
//! Read-only lookups used by the studio access check. Tenant membership is
//! resolved through the tenant_members join table.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, StudioId, TenantId, UserId};
use crate::domain::studio::{Studio, Tenant, TenantKind};
use crate::ports::StudioAccessReader;

/// PostgreSQL implementation of the StudioAccessReader port.
pub struct PostgresStudioAccessReader {
    pool: PgPool,
}

impl PostgresStudioAccessReader {
    /// Creates a new PostgresStudioAccessReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a tenant.
#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
    id: Uuid,
    name: String,
    kind: String,
}

impl TryFrom<TenantRow> for Tenant {
    type Error = DomainError;

    fn try_from(row: TenantRow) -> Result<Self, Self::Error> {
        Ok(Tenant {
            id: TenantId::from_uuid(row.id),
            name: row.name,
            kind: parse_kind(&row.kind)?,
        })
    }
}

/// Database row representation of a studio.
#[derive(Debug, sqlx::FromRow)]
struct StudioRow {
    id: Uuid,
    tenant_id: Uuid,
    name: String,
}

impl From<StudioRow> for Studio {
    fn from(row: StudioRow) -> Self {
        Studio {
            id: StudioId::from_uuid(row.id),
            tenant_id: TenantId::from_uuid(row.tenant_id),
            name: row.name,
        }
    }
}

fn parse_kind(s: &str) -> Result<TenantKind, DomainError> {
    match s.to_lowercase().as_str() {
        "standard" => Ok(TenantKind::Standard),
        "studio" => Ok(TenantKind::Studio),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid tenant kind: {}", s),
        )),
    }
}

#[async_trait]
impl StudioAccessReader for PostgresStudioAccessReader {
    async fn find_tenant_for_user(&self, user_id: &UserId) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.kind
            FROM tenants t
            JOIN tenant_members tm ON tm.tenant_id = t.id
            WHERE tm.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find tenant: {}", e))
        })?;

        row.map(Tenant::try_from).transpose()
    }

    async fn find_studio_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<Studio>, DomainError> {
        let row: Option<StudioRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, name
            FROM studios
            WHERE tenant_id = $1
            "#,
        )
        .bind(tenant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find studio: {}", e))
        })?;

        Ok(row.map(Studio::from))
    }
}
