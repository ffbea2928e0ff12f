//! StudioLink API server entry point.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters into the
//! feature routers and serves the API with axum.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::{middleware, routing::get, Json, Router};
use secrecy::SecretString;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studiolink::adapters::auth::{JwtConfig, JwtSessionValidator};
use studiolink::adapters::http::middleware::{auth_middleware, AuthState};
use studiolink::adapters::http::{
    profile_routes, studio_routes, subscription_routes, ProfileAppState, StudioAppState,
    SubscriptionAppState,
};
use studiolink::adapters::postgres::{
    PostgresProfileRepository, PostgresStudioAccessReader, PostgresSubscriptionRepository,
};
use studiolink::adapters::stripe::{StripeBillingAdapter, StripeConfig};
use studiolink::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    tracing::info!("Connected to database");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations completed");
    }

    let session_validator: AuthState = Arc::new(JwtSessionValidator::new(JwtConfig::new(
        SecretString::new(config.auth.session_secret.clone()),
    )));

    let mut stripe_config = StripeConfig::new(SecretString::new(
        config.billing.stripe_api_key.clone(),
    ));
    if let Some(base_url) = &config.billing.stripe_base_url {
        stripe_config = stripe_config.with_base_url(base_url.clone());
    }
    let billing_provider = Arc::new(StripeBillingAdapter::new(stripe_config));

    let profile_state = ProfileAppState {
        profile_repository: Arc::new(PostgresProfileRepository::new(pool.clone())),
    };
    let studio_state = StudioAppState {
        studio_reader: Arc::new(PostgresStudioAccessReader::new(pool.clone())),
    };
    let subscription_state = SubscriptionAppState {
        subscription_repository: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        billing_provider,
    };

    let api = Router::new()
        .merge(profile_routes().with_state(profile_state))
        .merge(studio_routes().with_state(studio_state))
        .merge(subscription_routes().with_state(subscription_state))
        .layer(middleware::from_fn_with_state(
            session_validator,
            auth_middleware,
        ));

    let app = Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.socket_addr();
    tracing::info!(environment = ?config.server.environment, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness endpoint, not behind auth.
async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// Build the CORS layer from configured origins.
///
/// Without configured origins (local development) every origin is allowed.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}
