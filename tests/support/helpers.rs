// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use sso_auth::application::{
    commands::auth::{AuthService, AuthSettings},
    dto::TokenClaims,
    ports::{
        security::{PasswordHasher, TokenIssuer},
        time::Clock,
    },
    services::ApplicationServices,
};
use sso_auth::infrastructure::{
    security::{password::Argon2PasswordHasher, token::JwtTokenIssuer},
    time::SystemClock,
};
use sso_auth::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;
use std::time::Duration;

pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Storage seeded with the standard test app.
pub fn seeded_storage() -> Arc<mocks::InMemoryStorage> {
    Arc::new(
        mocks::InMemoryStorage::new().with_app(mocks::TEST_APP_ID, "test", mocks::TEST_APP_SECRET),
    )
}

pub fn real_hasher() -> Arc<dyn PasswordHasher> {
    Arc::new(Argon2PasswordHasher)
}

pub fn real_issuer() -> Arc<dyn TokenIssuer> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    Arc::new(JwtTokenIssuer::new(clock))
}

/// Issuer whose clock is pinned to [`mocks::fixed_now`].
pub fn fixed_issuer() -> Arc<dyn TokenIssuer> {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    Arc::new(JwtTokenIssuer::new(clock))
}

/// Auth service over in-memory storage with the real hasher and issuer.
pub fn build_service(storage: Arc<mocks::InMemoryStorage>) -> AuthService {
    build_service_with(storage, real_hasher(), real_issuer())
}

pub fn build_service_with(
    storage: Arc<mocks::InMemoryStorage>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
) -> AuthService {
    AuthService::new(
        storage.clone(),
        storage.clone(),
        storage,
        hasher,
        issuer,
        AuthSettings::new(TOKEN_TTL),
    )
}

pub fn make_test_router(storage: Arc<mocks::InMemoryStorage>) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(
        storage.clone(),
        storage.clone(),
        storage,
        real_hasher(),
        real_issuer(),
        AuthSettings::new(TOKEN_TTL),
    ));
    build_router(HttpState { services })
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Decode a token with the given secret, enforcing HS256 and expiry.
pub fn decode_claims(token: &str, secret: &str) -> jsonwebtoken::errors::Result<TokenClaims> {
    let validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
    decode_with(token, secret, &validation)
}

/// Like [`decode_claims`] but accepts tokens whose `exp` is already in the past.
pub fn decode_claims_ignoring_expiry(
    token: &str,
    secret: &str,
) -> jsonwebtoken::errors::Result<TokenClaims> {
    let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = false;
    decode_with(token, secret, &validation)
}

fn decode_with(
    token: &str,
    secret: &str,
    validation: &jsonwebtoken::Validation,
) -> jsonwebtoken::errors::Result<TokenClaims> {
    jsonwebtoken::decode::<TokenClaims>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
        validation,
    )
    .map(|data| data.claims)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(
        err_field,
        expected_status.canonical_reason().unwrap_or("error"),
        "unexpected error field: {}",
        err_field
    );
    assert_eq!(msg_field, expected_message, "unexpected message field");
}
