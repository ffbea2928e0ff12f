//! HTTP adapter for studio endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::StudioAppState;
pub use routes::studio_routes;
