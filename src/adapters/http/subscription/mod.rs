//! HTTP adapter for subscription endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SubscriptionAppState;
pub use routes::subscription_routes;
