//! Ports: trait contracts for every external collaborator.
//!
//! Adapters implement these; application handlers depend only on the traits.

mod billing_provider;
mod profile_repository;
mod session_validator;
mod studio_reader;
mod subscription_repository;

pub use billing_provider::{
    BillingError, BillingErrorCode, BillingProvider, RemoteSubscription, UpdateSubscriptionRequest,
};
pub use profile_repository::ProfileRepository;
pub use session_validator::SessionValidator;
pub use studio_reader::StudioAccessReader;
pub use subscription_repository::SubscriptionRepository;
