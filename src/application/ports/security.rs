// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AccessToken};
use crate::domain::{app::App, user::{PasswordHash, User}};
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted, adaptive-cost hash. Hashing the same password twice yields
    /// different outputs.
    async fn hash(&self, password: &str) -> ApplicationResult<PasswordHash>;

    /// `Ok(false)` on mismatch. Errors are reserved for unusable hashes and
    /// executor failures.
    async fn verify(&self, password: &str, expected_hash: &PasswordHash) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `user`, scoped to `app` and valid for `ttl`.
    async fn issue(&self, user: &User, app: &App, ttl: Duration) -> ApplicationResult<AccessToken>;
}
