use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use crate::domain::user::PasswordHash;
use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with the crate's default cost parameters. The work runs on the
/// blocking pool so request handlers stay responsive.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<PasswordHash> {
        let password = password.to_owned();
        let encoded = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::internal(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::internal(err.to_string()))??;

        Ok(PasswordHash::new(encoded)?)
    }

    async fn verify(
        &self,
        password: &str,
        expected_hash: &PasswordHash,
    ) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.as_str().to_owned();
        tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            // A stored value that is not a PHC string can never match any password.
            let parsed = match PhcString::new(&expected_hash) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(error = %err, "stored password hash is not a valid PHC string");
                    return Ok(false);
                }
            };
            // Digest comparison inside verify_password is constant-time.
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(ApplicationError::internal(err.to_string())),
            }
        })
        .await
        .map_err(|err| ApplicationError::internal(err.to_string()))?
    }
}
