use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::User,
    value_objects::{Email, PasswordHash, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Persist a new user and return the identifier assigned by the store.
    ///
    /// Fails with `DomainError::Conflict` when the email is already taken. The
    /// uniqueness check must be atomic with the insert.
    async fn save_user(
        &self,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> DomainResult<UserId>;
}

#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Fails with `DomainError::NotFound` when no user has this email.
    async fn user_by_email(&self, email: &Email) -> DomainResult<User>;

    /// Fails with `DomainError::NotFound` when the user does not exist.
    async fn is_admin(&self, user_id: UserId) -> DomainResult<bool>;
}
