// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::User;
pub use repository::{UserProvider, UserSaver};
pub use value_objects::{Email, PasswordHash, UserId};
