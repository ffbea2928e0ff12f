//! Studio domain module: tenants and their studio resources.

mod aggregate;

pub use aggregate::{Studio, Tenant, TenantKind};
