//! PostgreSQL adapters - database implementations for the repository ports.
//!
//! - `PostgresProfileRepository` - profile persistence with child-table lists
//! - `PostgresStudioAccessReader` - tenant and studio lookups
//! - `PostgresSubscriptionRepository` - subscription persistence

mod profile_repository;
mod studio_reader;
mod subscription_repository;

pub use profile_repository::PostgresProfileRepository;
pub use studio_reader::PostgresStudioAccessReader;
pub use subscription_repository::PostgresSubscriptionRepository;
