// tests/support/mocks/storage.rs
use async_trait::async_trait;
use sso_auth::domain::{
    app::{App, AppId, AppProvider, AppSecret},
    errors::{DomainError, DomainResult},
    user::{Email, PasswordHash, User, UserId, UserProvider, UserSaver},
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    users: Vec<User>,
    apps: HashMap<i64, App>,
}

/// インメモリのストレージ（メール一意性をロック内で保証する）
#[derive(Default)]
pub struct InMemoryStorage {
    inner: Mutex<State>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_app(self, id: i64, name: &str, secret: &str) -> Self {
        let app = App {
            id: AppId::new(id).expect("invalid app id"),
            name: name.to_string(),
            secret: AppSecret::new(secret).expect("invalid app secret"),
        };
        self.inner.lock().unwrap().apps.insert(id, app);
        self
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn stored_hash(&self, email: &str) -> Option<PasswordHash> {
        self.inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email.as_str() == email)
            .map(|u| u.password_hash.clone())
    }

    /// 保存済みハッシュを任意の値で上書きする
    pub fn overwrite_hash(&self, email: &str, stored: &str) {
        let mut state = self.inner.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.email.as_str() == email) {
            user.password_hash = PasswordHash::new(stored).expect("invalid stored hash");
        }
    }

    pub fn promote(&self, user_id: i64) {
        let mut state = self.inner.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| i64::from(u.id) == user_id) {
            user.is_admin = true;
        }
    }
}

#[async_trait]
impl UserSaver for InMemoryStorage {
    async fn save_user(&self, email: &Email, password_hash: &PasswordHash) -> DomainResult<UserId> {
        let mut state = self.inner.lock().unwrap();
        if state.users.iter().any(|u| &u.email == email) {
            return Err(DomainError::Conflict("UNIQUE constraint failed: users.email".into()));
        }

        let id = UserId::new(state.users.len() as i64 + 1)?;
        state.users.push(User {
            id,
            email: email.clone(),
            password_hash: password_hash.clone(),
            is_admin: false,
        });
        Ok(id)
    }
}

#[async_trait]
impl UserProvider for InMemoryStorage {
    async fn user_by_email(&self, email: &Email) -> DomainResult<User> {
        let state = self.inner.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| &u.email == email)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn is_admin(&self, user_id: UserId) -> DomainResult<bool> {
        let state = self.inner.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.is_admin)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}

#[async_trait]
impl AppProvider for InMemoryStorage {
    async fn app_by_id(&self, app_id: AppId) -> DomainResult<App> {
        let state = self.inner.lock().unwrap();
        state
            .apps
            .get(&i64::from(app_id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("app not found".into()))
    }
}

/// すべての操作が永続化エラーになるストレージ
#[derive(Clone, Debug, Default)]
pub struct BrokenStorage;

fn broken() -> DomainError {
    DomainError::Persistence("disk I/O error at /var/lib/sso/storage.db".into())
}

#[async_trait]
impl UserSaver for BrokenStorage {
    async fn save_user(
        &self,
        _email: &Email,
        _password_hash: &PasswordHash,
    ) -> DomainResult<UserId> {
        Err(broken())
    }
}

#[async_trait]
impl UserProvider for BrokenStorage {
    async fn user_by_email(&self, _email: &Email) -> DomainResult<User> {
        Err(broken())
    }

    async fn is_admin(&self, _user_id: UserId) -> DomainResult<bool> {
        Err(broken())
    }
}

#[async_trait]
impl AppProvider for BrokenStorage {
    async fn app_by_id(&self, _app_id: AppId) -> DomainResult<App> {
        Err(broken())
    }
}
