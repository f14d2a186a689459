use crate::domain::errors::DomainError;

const CNT_USERS_EMAIL: &str = "users.email";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                // SQLite reports the violated column list in the message.
                return if db_err.message().contains(CNT_USERS_EMAIL) {
                    DomainError::Conflict("email already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
