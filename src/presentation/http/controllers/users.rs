use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::PathRejection},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

pub async fn is_admin(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<IsAdminResponse>> {
    let Path(id) = id.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
    if id == 0 {
        return Err(HttpError::bad_request("user_id is required"));
    }

    state
        .services
        .auth
        .is_admin(id)
        .await
        .into_http()
        .map(|is_admin| Json(IsAdminResponse { is_admin }))
}
