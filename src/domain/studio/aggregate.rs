//! Tenant and Studio entities.
//!
//! A Tenant is the organizational boundary a user belongs to. Its kind
//! discriminates studio accounts from ordinary ones; only studio-kind
//! tenants own a Studio row.

use crate::domain::foundation::{StudioId, TenantId};
use serde::{Deserialize, Serialize};

/// Discriminator for tenant account types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantKind {
    /// Ordinary member account.
    Standard,

    /// Studio account; owns exactly one Studio.
    Studio,
}

impl TenantKind {
    /// Returns true for studio-kind tenants.
    pub fn is_studio(&self) -> bool {
        matches!(self, TenantKind::Studio)
    }
}

/// Tenant entity - the organizational boundary a user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier for this tenant.
    pub id: TenantId,

    /// Tenant display name.
    pub name: String,

    /// Account type discriminator.
    pub kind: TenantKind,
}

/// Studio entity - the resource owned by a studio-kind tenant.
///
/// # Invariants
///
/// - A Studio exists only for a Tenant of studio kind (enforced upstream)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    /// Unique identifier for this studio.
    pub id: StudioId,

    /// Owning tenant.
    pub tenant_id: TenantId,

    /// Studio display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_kind_is_studio() {
        assert!(TenantKind::Studio.is_studio());
        assert!(!TenantKind::Standard.is_studio());
    }

    #[test]
    fn tenant_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TenantKind::Studio).unwrap(),
            r#""studio""#
        );
        assert_eq!(
            serde_json::to_string(&TenantKind::Standard).unwrap(),
            r#""standard""#
        );
    }
}
