use std::{sync::Arc, time::Duration};

use crate::application::{
    error::ApplicationError,
    logging::EmailLogPolicy,
    ports::security::{PasswordHasher, TokenIssuer},
};
use crate::domain::{
    app::AppProvider,
    errors::DomainError,
    user::{UserProvider, UserSaver},
};

/// Process-wide knobs handed to the service at construction time.
#[derive(Debug, Clone, Copy)]
pub struct AuthSettings {
    pub token_ttl: Duration,
    pub email_log_policy: EmailLogPolicy,
}

impl AuthSettings {
    pub fn new(token_ttl: Duration) -> Self {
        Self {
            token_ttl,
            email_log_policy: EmailLogPolicy::default(),
        }
    }

    pub fn with_email_log_policy(mut self, policy: EmailLogPolicy) -> Self {
        self.email_log_policy = policy;
        self
    }
}

/// Registration and login. Holds no mutable state; every call is independent
/// and all persistence goes through the storage capabilities.
pub struct AuthService {
    pub(super) user_saver: Arc<dyn UserSaver>,
    pub(super) user_provider: Arc<dyn UserProvider>,
    pub(super) app_provider: Arc<dyn AppProvider>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_issuer: Arc<dyn TokenIssuer>,
    pub(super) settings: AuthSettings,
}

impl AuthService {
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        settings: AuthSettings,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher,
            token_issuer,
            settings,
        }
    }

    pub(super) fn shown_email(&self, email: &str) -> String {
        self.settings.email_log_policy.render(email)
    }
}

/// Log an unexpected storage failure and replace it with an opaque internal error.
pub(super) fn storage_failure(
    op: &'static str,
    email: &str,
    err: DomainError,
    context: &'static str,
) -> ApplicationError {
    tracing::error!(op, email, error = %err, "{context}");
    ApplicationError::internal(context)
}

/// Same as [`storage_failure`] for errors already lifted into the application layer.
pub(super) fn internal_failure(
    op: &'static str,
    email: &str,
    err: ApplicationError,
    context: &'static str,
) -> ApplicationError {
    tracing::error!(op, email, error = %err, "{context}");
    ApplicationError::internal(context)
}
