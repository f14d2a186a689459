use super::{
    AuthService,
    service::{internal_failure, storage_failure},
};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::DomainError,
        user::{Email, UserId},
    },
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl AuthService {
    /// Hash the password and store a new user. A taken email yields
    /// `UserExists`; races between concurrent registrations are settled by the store.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserId> {
        const OP: &str = "auth.register";

        let email = Email::new(command.email)?;
        if command.password.is_empty() {
            return Err(ApplicationError::validation("password cannot be empty"));
        }
        let shown = self.shown_email(email.as_str());

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .await
            .map_err(|err| internal_failure(OP, &shown, err, "failed to hash password"))?;

        let user_id = match self.user_saver.save_user(&email, &password_hash).await {
            Ok(id) => id,
            Err(DomainError::Conflict(_)) => {
                tracing::warn!(op = OP, email = %shown, "user already exists");
                return Err(ApplicationError::UserExists);
            }
            Err(err) => return Err(storage_failure(OP, &shown, err, "failed to save user")),
        };

        tracing::info!(op = OP, email = %shown, user_id = %user_id, "user registered");
        Ok(user_id)
    }
}
