// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub is_admin: bool,
}
