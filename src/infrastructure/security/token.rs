// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AccessToken, TokenClaims},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenIssuer, time::Clock},
};
use crate::domain::{app::App, user::User};
use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::{sync::Arc, time::Duration};

/// Issues HS256 JWTs signed with the secret of the app the user logs into.
/// Verification belongs to the apps themselves.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    clock: Arc<dyn Clock>,
}

impl JwtTokenIssuer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

fn sign(claims: &TokenClaims, secret: &[u8]) -> ApplicationResult<String> {
    let key = EncodingKey::from_secret(secret);
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|err| ApplicationError::internal(err.to_string()))
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn issue(&self, user: &User, app: &App, ttl: Duration) -> ApplicationResult<AccessToken> {
        let issued_at = self.clock.now();
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|_| ApplicationError::internal("token ttl out of range"))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::internal("token expiration overflow"))?;

        let claims = TokenClaims {
            uid: i64::from(user.id),
            email: user.email.to_string(),
            app_id: i64::from(app.id),
            exp: expires_at.timestamp(),
        };
        let token = sign(&claims, app.secret.as_bytes())?;

        Ok(AccessToken {
            token,
            issued_at,
            expires_at,
        })
    }
}
