//! Domain layer: aggregates and value objects.

pub mod foundation;
pub mod profile;
pub mod studio;
pub mod subscription;
