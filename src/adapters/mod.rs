//! Adapters - implementations of the ports against real infrastructure.
//!
//! Each submodule adapts one external concern:
//! - `auth` - session token validation
//! - `http` - axum routes, DTOs, and middleware
//! - `postgres` - sqlx repositories and readers
//! - `stripe` - billing provider client

pub mod auth;
pub mod http;
pub mod postgres;
pub mod stripe;
