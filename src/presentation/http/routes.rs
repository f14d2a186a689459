// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/users/{id}/is-admin", get(users::is_admin))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
