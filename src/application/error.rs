// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures visible at the service boundary. Storage conditions are translated
/// into these kinds; the raw storage message never travels inside them.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown email and wrong password both end up here.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserExists,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Conflict(_) | DomainError::Persistence(_) => {
                Self::internal("storage failure")
            }
        }
    }
}
