//! Studio operation handlers.

mod check_access;

pub use check_access::{CheckStudioAccessHandler, CheckStudioAccessQuery, StudioDescriptor};
