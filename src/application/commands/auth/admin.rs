use super::AuthService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{errors::DomainError, user::UserId},
};

impl AuthService {
    /// Read the admin flag of a user. Not part of the register/login flow.
    pub async fn is_admin(&self, user_id: i64) -> ApplicationResult<bool> {
        const OP: &str = "auth.is_admin";

        let user_id = UserId::new(user_id)?;

        match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => {
                tracing::debug!(op = OP, user_id = %user_id, is_admin, "checked admin flag");
                Ok(is_admin)
            }
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(op = OP, user_id = %user_id, "user not found");
                Err(ApplicationError::not_found("user not found"))
            }
            Err(err) => {
                tracing::error!(
                    op = OP,
                    user_id = %user_id,
                    error = %err,
                    "failed to check admin flag"
                );
                Err(ApplicationError::internal("failed to check admin flag"))
            }
        }
    }
}
