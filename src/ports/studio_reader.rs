//! Studio access reader port.

use crate::domain::foundation::{DomainError, TenantId, UserId};
use crate::domain::studio::{Studio, Tenant};
use async_trait::async_trait;

/// Read-side port for the studio access check.
///
/// Both lookups are nullable single-record queries; the handler owns the
/// 403/404 decisions, this port only reports presence or absence.
#[async_trait]
pub trait StudioAccessReader: Send + Sync {
    /// Finds the tenant a user is currently associated with.
    async fn find_tenant_for_user(&self, user_id: &UserId)
        -> Result<Option<Tenant>, DomainError>;

    /// Finds the studio owned by a tenant.
    async fn find_studio_by_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Option<Studio>, DomainError>;
}
