//! Profile domain module.

mod aggregate;

pub use aggregate::Profile;
