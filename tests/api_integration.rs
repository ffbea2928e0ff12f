//! Integration tests for the API router.
//!
//! These tests drive the full axum router (auth middleware included) with
//! in-memory adapters and verify:
//! 1. Unauthenticated requests are rejected without side effects
//! 2. Profile initialization is idempotent
//! 3. Studio access checks distinguish forbidden from missing
//! 4. Subscription cancel/resume call the billing provider correctly

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{middleware, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use studiolink::adapters::auth::MockSessionValidator;
use studiolink::adapters::http::middleware::{auth_middleware, AuthState};
use studiolink::adapters::http::{
    profile_routes, studio_routes, subscription_routes, ProfileAppState, StudioAppState,
    SubscriptionAppState,
};
use studiolink::adapters::stripe::MockBillingProvider;
use studiolink::domain::foundation::{
    DomainError, ErrorCode, StudioId, SubscriptionId, TenantId, Timestamp, UserId,
};
use studiolink::domain::profile::Profile;
use studiolink::domain::studio::{Studio, Tenant, TenantKind};
use studiolink::domain::subscription::{Subscription, SubscriptionStatus};
use studiolink::ports::{
    ProfileRepository, RemoteSubscription, StudioAccessReader, SubscriptionRepository,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TOKEN: &str = "valid-token";
const USER_ID: &str = "test-user-123";

/// Mock profile repository for testing
#[derive(Default)]
struct MockProfileRepository {
    profiles: Mutex<Vec<Profile>>,
}

impl MockProfileRepository {
    fn count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.user_id == user_id)
            .cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<(), DomainError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }
}

/// Mock studio reader for testing
#[derive(Default)]
struct MockStudioReader {
    tenant: Option<Tenant>,
    studio: Option<Studio>,
    fail: bool,
}

#[async_trait]
impl StudioAccessReader for MockStudioReader {
    async fn find_tenant_for_user(&self, _user_id: &UserId) -> Result<Option<Tenant>, DomainError> {
        if self.fail {
            return Err(DomainError::new(ErrorCode::DatabaseError, "connection lost"));
        }
        Ok(self.tenant.clone())
    }

    async fn find_studio_by_tenant(
        &self,
        _tenant_id: &TenantId,
    ) -> Result<Option<Studio>, DomainError> {
        if self.fail {
            return Err(DomainError::new(ErrorCode::DatabaseError, "connection lost"));
        }
        Ok(self.studio.clone())
    }
}

/// Mock subscription repository for testing
#[derive(Default)]
struct MockSubscriptionRepository {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl MockSubscriptionRepository {
    fn with_subscription(subscription: Subscription) -> Self {
        Self {
            subscriptions: Mutex::new(vec![subscription]),
        }
    }

    fn stored(&self) -> Vec<Subscription> {
        self.subscriptions.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn find_cancellable_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.user_id == user_id && s.status.is_cancellable())
            .cloned())
    }

    async fn find_pending_cancellation_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.user_id == user_id && s.cancel_at_period_end)
            .cloned())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        if let Some(s) = subscriptions.iter_mut().find(|s| s.id == subscription.id) {
            *s = subscription.clone();
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            ))
        }
    }
}

struct TestApp {
    router: Router,
    profile_repository: Arc<MockProfileRepository>,
    subscription_repository: Arc<MockSubscriptionRepository>,
    billing_provider: Arc<MockBillingProvider>,
}

/// Assemble the API router the way the binary does, with mock adapters.
fn test_app(studio_reader: MockStudioReader) -> TestApp {
    let validator: AuthState =
        Arc::new(MockSessionValidator::new().with_test_user(TOKEN, USER_ID));

    let profile_repository = Arc::new(MockProfileRepository::default());
    let subscription_repository = Arc::new(MockSubscriptionRepository::default());
    let billing_provider = Arc::new(MockBillingProvider::new());

    build_router(
        validator,
        profile_repository,
        subscription_repository,
        billing_provider,
        studio_reader,
    )
}

fn build_router(
    validator: AuthState,
    profile_repository: Arc<MockProfileRepository>,
    subscription_repository: Arc<MockSubscriptionRepository>,
    billing_provider: Arc<MockBillingProvider>,
    studio_reader: MockStudioReader,
) -> TestApp {
    let api = Router::new()
        .merge(profile_routes().with_state(ProfileAppState {
            profile_repository: profile_repository.clone(),
        }))
        .merge(studio_routes().with_state(StudioAppState {
            studio_reader: Arc::new(studio_reader),
        }))
        .merge(subscription_routes().with_state(SubscriptionAppState {
            subscription_repository: subscription_repository.clone(),
            billing_provider: billing_provider.clone(),
        }))
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    TestApp {
        router: Router::new().nest("/api", api),
        profile_repository,
        subscription_repository,
        billing_provider,
    }
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn studio_tenant() -> Tenant {
    Tenant {
        id: TenantId::new(),
        name: "Studio One".to_string(),
        kind: TenantKind::Studio,
    }
}

fn studio_for(tenant: &Tenant) -> Studio {
    Studio {
        id: StudioId::new(),
        tenant_id: tenant.id,
        name: "Studio One".to_string(),
    }
}

fn active_subscription() -> Subscription {
    let now = Timestamp::now();
    Subscription {
        id: SubscriptionId::new(),
        user_id: UserId::new(USER_ID).unwrap(),
        remote_id: Some("sub_remote123".to_string()),
        status: SubscriptionStatus::Active,
        cancel_at_period_end: false,
        current_period_end: now.add_days(30),
        created_at: now,
        updated_at: now,
    }
}

fn remote_subscription() -> RemoteSubscription {
    RemoteSubscription {
        id: "sub_remote123".to_string(),
        status: SubscriptionStatus::Active,
        cancel_at_period_end: false,
        current_period_end: 1_767_225_600,
        canceled_at: None,
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn unauthenticated_requests_are_rejected() {
    for (method, uri) in [
        ("POST", "/api/profile-init"),
        ("GET", "/api/studio/check-access"),
        ("POST", "/api/user/subscription/cancel"),
        ("POST", "/api/user/subscription/resume"),
    ] {
        let app = test_app(MockStudioReader::default());
        let response = app
            .router
            .oneshot(request(method, uri, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        let body = body_json(response).await;
        assert_eq!(body["code"], "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn invalid_token_is_rejected() {
    let app = test_app(MockStudioReader::default());

    let response = app
        .router
        .oneshot(request("POST", "/api/profile-init", Some("wrong-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unauthenticated_request_does_not_mutate_state() {
    let app = test_app(MockStudioReader::default());

    let response = app
        .router
        .clone()
        .oneshot(request("POST", "/api/profile-init", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.profile_repository.count(), 0);

    let response = app
        .router
        .oneshot(request("POST", "/api/user/subscription/cancel", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.billing_provider.update_calls().is_empty());
}

// =============================================================================
// Profile Initialization
// =============================================================================

#[tokio::test]
async fn profile_init_creates_profile_on_first_call() {
    let app = test_app(MockStudioReader::default());

    let response = app
        .router
        .oneshot(request("POST", "/api/profile-init", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Profile created");
    assert_eq!(body["profile"]["user_id"], USER_ID);
    assert_eq!(body["profile"]["available"], true);
    assert_eq!(app.profile_repository.count(), 1);
}

#[tokio::test]
async fn profile_init_is_idempotent() {
    let app = test_app(MockStudioReader::default());

    let first = app
        .router
        .clone()
        .oneshot(request("POST", "/api/profile-init", Some(TOKEN)))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .router
        .oneshot(request("POST", "/api/profile-init", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(second.status(), StatusCode::OK);
    let body = body_json(second).await;
    assert_eq!(body["message"], "Profile already exists");
    assert_eq!(app.profile_repository.count(), 1);
}

// =============================================================================
// Studio Access
// =============================================================================

#[tokio::test]
async fn studio_check_returns_ok_for_studio_member() {
    let tenant = studio_tenant();
    let studio = studio_for(&tenant);
    let app = test_app(MockStudioReader {
        tenant: Some(tenant),
        studio: Some(studio),
        fail: false,
    });

    let response = app
        .router
        .oneshot(request("GET", "/api/studio/check-access", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["studio"]["name"], "Studio One");
}

#[tokio::test]
async fn studio_check_is_forbidden_without_tenant() {
    let app = test_app(MockStudioReader::default());

    let response = app
        .router
        .oneshot(request("GET", "/api/studio/check-access", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn studio_check_is_forbidden_for_standard_tenant() {
    let tenant = Tenant {
        id: TenantId::new(),
        name: "Regular Org".to_string(),
        kind: TenantKind::Standard,
    };
    // Even with a studio row present, a standard tenant is forbidden.
    let studio = studio_for(&tenant);
    let app = test_app(MockStudioReader {
        tenant: Some(tenant),
        studio: Some(studio),
        fail: false,
    });

    let response = app
        .router
        .oneshot(request("GET", "/api/studio/check-access", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn studio_check_is_not_found_without_studio_row() {
    let app = test_app(MockStudioReader {
        tenant: Some(studio_tenant()),
        studio: None,
        fail: false,
    });

    let response = app
        .router
        .oneshot(request("GET", "/api/studio/check-access", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "STUDIO_NOT_FOUND");
}

#[tokio::test]
async fn studio_check_maps_reader_failure_to_500() {
    let app = test_app(MockStudioReader {
        tenant: None,
        studio: None,
        fail: true,
    });

    let response = app
        .router
        .oneshot(request("GET", "/api/studio/check-access", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // The 500 body carries the underlying error text, not a generic message.
    let body = body_json(response).await;
    assert_eq!(body["code"], "INTERNAL_ERROR");
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Internal server error:"), "got: {error}");
    assert!(error.contains("connection lost"), "got: {error}");
}

// =============================================================================
// Subscription Cancel / Resume
// =============================================================================

#[tokio::test]
async fn cancel_without_subscription_is_404_and_skips_billing() {
    let app = test_app(MockStudioReader::default());

    let response = app
        .router
        .oneshot(request("POST", "/api/user/subscription/cancel", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "SUBSCRIPTION_NOT_FOUND");
    assert!(app.billing_provider.update_calls().is_empty());
}

#[tokio::test]
async fn cancel_schedules_cancellation_at_period_end() {
    let validator: AuthState =
        Arc::new(MockSessionValidator::new().with_test_user(TOKEN, USER_ID));
    let app = build_router(
        validator,
        Arc::new(MockProfileRepository::default()),
        Arc::new(MockSubscriptionRepository::with_subscription(
            active_subscription(),
        )),
        Arc::new(MockBillingProvider::new().with_subscription(remote_subscription())),
        MockStudioReader::default(),
    );

    let response = app
        .router
        .oneshot(request("POST", "/api/user/subscription/cancel", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Subscription will be canceled at the end of the billing period"
    );

    let stored = app.subscription_repository.stored();
    assert!(stored[0].cancel_at_period_end);

    let calls = app.billing_provider.update_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].remote_id, "sub_remote123");
    assert!(calls[0].cancel_at_period_end);
    assert!(calls[0]
        .idempotency_key
        .as_deref()
        .unwrap()
        .ends_with(":cancel"));
}

#[tokio::test]
async fn resume_without_pending_cancellation_is_404() {
    let validator: AuthState =
        Arc::new(MockSessionValidator::new().with_test_user(TOKEN, USER_ID));
    let app = build_router(
        validator,
        Arc::new(MockProfileRepository::default()),
        Arc::new(MockSubscriptionRepository::with_subscription(
            active_subscription(),
        )),
        Arc::new(MockBillingProvider::new().with_subscription(remote_subscription())),
        MockStudioReader::default(),
    );

    let response = app
        .router
        .oneshot(request("POST", "/api/user/subscription/resume", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(app.billing_provider.update_calls().is_empty());
}

#[tokio::test]
async fn cancel_then_resume_round_trips() {
    let validator: AuthState =
        Arc::new(MockSessionValidator::new().with_test_user(TOKEN, USER_ID));
    let app = build_router(
        validator,
        Arc::new(MockProfileRepository::default()),
        Arc::new(MockSubscriptionRepository::with_subscription(
            active_subscription(),
        )),
        Arc::new(MockBillingProvider::new().with_subscription(remote_subscription())),
        MockStudioReader::default(),
    );

    let cancel = app
        .router
        .clone()
        .oneshot(request("POST", "/api/user/subscription/cancel", Some(TOKEN)))
        .await
        .unwrap();
    assert_eq!(cancel.status(), StatusCode::OK);
    assert!(app.subscription_repository.stored()[0].cancel_at_period_end);

    let resume = app
        .router
        .oneshot(request("POST", "/api/user/subscription/resume", Some(TOKEN)))
        .await
        .unwrap();
    assert_eq!(resume.status(), StatusCode::OK);

    let body = body_json(resume).await;
    assert_eq!(body["message"], "Subscription resumed");
    assert!(!app.subscription_repository.stored()[0].cancel_at_period_end);

    let calls = app.billing_provider.update_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].cancel_at_period_end);
    assert!(!calls[1].cancel_at_period_end);
    assert!(calls[1]
        .idempotency_key
        .as_deref()
        .unwrap()
        .ends_with(":resume"));
}

#[tokio::test]
async fn cancel_with_billing_outage_is_500_and_keeps_local_state() {
    let validator: AuthState =
        Arc::new(MockSessionValidator::new().with_test_user(TOKEN, USER_ID));
    let app = build_router(
        validator,
        Arc::new(MockProfileRepository::default()),
        Arc::new(MockSubscriptionRepository::with_subscription(
            active_subscription(),
        )),
        Arc::new(MockBillingProvider::new().with_error(
            studiolink::ports::BillingError::network("connection refused"),
        )),
        MockStudioReader::default(),
    );

    let response = app
        .router
        .oneshot(request("POST", "/api/user/subscription/cancel", Some(TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!app.subscription_repository.stored()[0].cancel_at_period_end);
}
