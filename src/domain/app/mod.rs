// src/domain/app/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::App;
pub use repository::AppProvider;
pub use value_objects::{AppId, AppSecret};
