// src/infrastructure/repositories/sqlite_storage.rs
use super::map_sqlx;
use crate::domain::app::{App, AppId, AppProvider, AppSecret};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, PasswordHash, User, UserId, UserProvider, UserSaver};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

/// SQLite-backed implementation of every storage capability the auth service
/// consumes.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: String,
    is_admin: bool,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.pass_hash)?,
            is_admin: row.is_admin,
        })
    }
}

#[derive(Debug, FromRow)]
struct AppRow {
    id: i64,
    name: String,
    secret: Vec<u8>,
}

impl TryFrom<AppRow> for App {
    type Error = DomainError;

    fn try_from(row: AppRow) -> Result<Self, Self::Error> {
        Ok(App {
            id: AppId::new(row.id)?,
            name: row.name,
            secret: AppSecret::new(row.secret)?,
        })
    }
}

#[async_trait]
impl UserSaver for SqliteStorage {
    async fn save_user(&self, email: &Email, password_hash: &PasswordHash) -> DomainResult<UserId> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES (?1, ?2)")
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        UserId::new(result.last_insert_rowid())
    }
}

#[async_trait]
impl UserProvider for SqliteStorage {
    async fn user_by_email(&self, email: &Email) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, pass_hash, is_admin FROM users WHERE email = ?1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.ok_or_else(|| DomainError::NotFound("user not found".into()))?
            .try_into()
    }

    async fn is_admin(&self, user_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = ?1")
            .bind(i64::from(user_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}

#[async_trait]
impl AppProvider for SqliteStorage {
    async fn app_by_id(&self, app_id: AppId) -> DomainResult<App> {
        let row = sqlx::query_as::<_, AppRow>("SELECT id, name, secret FROM apps WHERE id = ?1")
            .bind(i64::from(app_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.ok_or_else(|| DomainError::NotFound("app not found".into()))?
            .try_into()
    }
}
