// src/domain/app/entity.rs
use crate::domain::app::value_objects::{AppId, AppSecret};

/// A tenant service that delegates identity checks to this authority. Apps are
/// provisioned out of band and only ever read here.
#[derive(Debug, Clone)]
pub struct App {
    pub id: AppId,
    pub name: String,
    pub secret: AppSecret,
}
