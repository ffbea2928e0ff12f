//! Foundation types shared across the domain: identifiers, timestamps,
//! authentication types, and error types.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ProfileId, StudioId, SubscriptionId, TenantId, UserId};
pub use timestamp::Timestamp;
