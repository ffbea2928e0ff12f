//! One handler per API operation, grouped by feature area.

pub mod profile;
pub mod studio;
pub mod subscription;
