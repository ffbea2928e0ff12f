//! Errors raised while assembling configuration at startup.

use thiserror::Error;

/// Failure to produce a usable [`AppConfig`](super::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment could not be read or deserialized.
    #[error("could not read configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// The environment deserialized fine but a value is unusable.
    #[error("configuration rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// A loaded configuration value that cannot be used as-is.
///
/// Variants name the offending key in `section.key` form where one exists.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} is required but not set")]
    MissingValue(&'static str),

    #[error("server bind address `{0}` is not valid")]
    BadBindAddress(String),

    #[error("server request timeout must be between 1 and 120 seconds")]
    BadRequestTimeout,

    #[error("database.url must use the postgres:// or postgresql:// scheme")]
    BadDatabaseUrl,

    #[error("database pool bounds are inconsistent (min above max, or max of zero)")]
    BadPoolBounds,

    #[error("auth.session_secret must be at least {0} bytes")]
    WeakSessionSecret(usize),

    #[error("billing.stripe_api_key must start with sk_")]
    BadStripeKey,

    #[error("live Stripe key is not allowed outside the production environment")]
    LiveKeyOutsideProduction,
}
