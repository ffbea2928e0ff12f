//! Subscription domain module.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Subscription;
pub use errors::SubscriptionError;
pub use status::SubscriptionStatus;
