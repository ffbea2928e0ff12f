//! CheckStudioAccessHandler - verifies the caller belongs to a studio tenant.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, StudioId, UserId};
use crate::ports::StudioAccessReader;

/// Query asking whether the caller's tenant grants studio access.
#[derive(Debug, Clone)]
pub struct CheckStudioAccessQuery {
    pub user_id: UserId,
}

/// Minimal studio descriptor returned on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioDescriptor {
    pub id: StudioId,
    pub name: String,
}

/// Handler for the studio access check.
///
/// The tenant kind gates before studio existence: a non-studio tenant is
/// Forbidden regardless of whether a studio row happens to exist.
pub struct CheckStudioAccessHandler {
    reader: Arc<dyn StudioAccessReader>,
}

impl CheckStudioAccessHandler {
    pub fn new(reader: Arc<dyn StudioAccessReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: CheckStudioAccessQuery,
    ) -> Result<StudioDescriptor, DomainError> {
        let tenant = match self.reader.find_tenant_for_user(&query.user_id).await? {
            Some(tenant) => tenant,
            None => {
                return Err(DomainError::new(
                    ErrorCode::Forbidden,
                    "User has no tenant association",
                ))
            }
        };

        if !tenant.kind.is_studio() {
            return Err(DomainError::new(
                ErrorCode::Forbidden,
                "Tenant is not a studio account",
            ));
        }

        match self.reader.find_studio_by_tenant(&tenant.id).await? {
            Some(studio) => Ok(StudioDescriptor {
                id: studio.id,
                name: studio.name,
            }),
            None => Err(DomainError::new(
                ErrorCode::StudioNotFound,
                "No studio found for tenant",
            )),
        }
    }
}
