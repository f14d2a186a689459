// src/domain/mod.rs
pub mod app;
pub mod errors;
pub mod user;
