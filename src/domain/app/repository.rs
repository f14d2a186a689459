use crate::domain::app::{entity::App, value_objects::AppId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Fails with `DomainError::NotFound` when the app is not provisioned.
    async fn app_by_id(&self, app_id: AppId) -> DomainResult<App>;
}
