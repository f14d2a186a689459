// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::auth::{AuthService, AuthSettings},
        ports::security::{PasswordHasher, TokenIssuer},
    },
    domain::{
        app::AppProvider,
        user::{UserProvider, UserSaver},
    },
};

pub struct ApplicationServices {
    pub auth: Arc<AuthService>,
}

impl ApplicationServices {
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        settings: AuthSettings,
    ) -> Self {
        let auth = Arc::new(AuthService::new(
            user_saver,
            user_provider,
            app_provider,
            password_hasher,
            token_issuer,
            settings,
        ));

        Self { auth }
    }
}
