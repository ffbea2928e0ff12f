//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter module with DTOs, handlers, and
//! routes; `middleware` carries the shared auth layer.

pub mod middleware;
pub mod profile;
pub mod studio;
pub mod subscription;

pub use profile::{profile_routes, ProfileAppState};
pub use studio::{studio_routes, StudioAppState};
pub use subscription::{subscription_routes, SubscriptionAppState};
