use super::{
    AuthService,
    service::{internal_failure, storage_failure},
};
use crate::{
    application::{
        dto::AccessToken,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{app::AppId, errors::DomainError, user::Email},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
    pub app_id: i64,
}

impl AuthService {
    /// Verify credentials and issue a token for the requested app.
    ///
    /// An unknown email and a wrong password both return `InvalidCredentials`;
    /// only the log level tells them apart.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AccessToken> {
        const OP: &str = "auth.login";

        let email = Email::new(command.email)?;
        let app_id = AppId::new(command.app_id)?;
        let shown = self.shown_email(email.as_str());

        let user = match self.user_provider.user_by_email(&email).await {
            Ok(user) => user,
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(op = OP, email = %shown, "user not found");
                return Err(ApplicationError::InvalidCredentials);
            }
            Err(err) => return Err(storage_failure(OP, &shown, err, "failed to load user")),
        };

        let matches = self
            .password_hasher
            .verify(&command.password, &user.password_hash)
            .await
            .map_err(|err| internal_failure(OP, &shown, err, "failed to verify password"))?;
        if !matches {
            tracing::info!(op = OP, email = %shown, user_id = %user.id, "invalid password");
            return Err(ApplicationError::InvalidCredentials);
        }

        let app = match self.app_provider.app_by_id(app_id).await {
            Ok(app) => app,
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(op = OP, email = %shown, app_id = %app_id, "app not found");
                return Err(ApplicationError::not_found("app not found"));
            }
            Err(err) => return Err(storage_failure(OP, &shown, err, "failed to load app")),
        };

        let token = self
            .token_issuer
            .issue(&user, &app, self.settings.token_ttl)
            .await
            .map_err(|err| internal_failure(OP, &shown, err, "failed to issue token"))?;

        tracing::info!(
            op = OP,
            email = %shown,
            user_id = %user.id,
            app_id = %app.id,
            "user logged in"
        );
        Ok(token)
    }
}
