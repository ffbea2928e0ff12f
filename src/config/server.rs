//! HTTP listener settings.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Settings for the axum listener and its middleware stack.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,

    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Drives production-only checks such as the live Stripe key gate.
    #[serde(default)]
    pub environment: Environment,

    /// Tracing filter applied when `RUST_LOG` is not set.
    #[serde(default = "defaults::log_level")]
    pub log_level: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Comma-separated allowed CORS origins. Leaving this unset yields a
    /// permissive CORS layer, acceptable only for local development.
    #[serde(default)]
    pub cors_origins: Option<String>,
}

/// Deployment environment the server believes it is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    /// Address the listener binds to. Only meaningful after [`validate`].
    ///
    /// [`validate`]: ServerConfig::validate
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("bind address was validated at startup")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured CORS origins, empty when none are set.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        if self.port == 0 || addr.parse::<SocketAddr>().is_err() {
            return Err(ValidationError::BadBindAddress(addr));
        }
        if !(1..=120).contains(&self.request_timeout_secs) {
            return Err(ValidationError::BadRequestTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            environment: Environment::default(),
            log_level: defaults::log_level(),
            request_timeout_secs: defaults::request_timeout_secs(),
            cors_origins: None,
        }
    }
}

mod defaults {
    pub(super) fn host() -> String {
        "0.0.0.0".to_string()
    }

    pub(super) fn port() -> u16 {
        8080
    }

    pub(super) fn log_level() -> String {
        "info,studiolink=debug,sqlx=warn".to_string()
    }

    pub(super) fn request_timeout_secs() -> u64 {
        30
    }
}
