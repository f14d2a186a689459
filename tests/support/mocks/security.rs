// tests/support/mocks/security.rs
use async_trait::async_trait;
use sso_auth::application::{
    ApplicationResult,
    dto::AccessToken,
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenIssuer},
};
use sso_auth::domain::{
    app::App,
    user::{PasswordHash, User},
};
use std::time::Duration;

/// テスト用アプリ定数
pub const TEST_APP_ID: i64 = 1;
pub const TEST_APP_SECRET: &str = "test-secret";

/* -------------------------------- PasswordHasher -------------------------------- */

/// ハッシュ生成が常に失敗するハッシャー
#[derive(Clone, Debug, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<PasswordHash> {
        Err(ApplicationError::internal("out of memory"))
    }

    async fn verify(
        &self,
        _password: &str,
        _expected_hash: &PasswordHash,
    ) -> ApplicationResult<bool> {
        Err(ApplicationError::internal("out of memory"))
    }
}

/* -------------------------------- TokenIssuer -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct FailingTokenIssuer;

#[async_trait]
impl TokenIssuer for FailingTokenIssuer {
    async fn issue(
        &self,
        _user: &User,
        _app: &App,
        _ttl: Duration,
    ) -> ApplicationResult<AccessToken> {
        Err(ApplicationError::internal("InvalidKeyFormat"))
    }
}
