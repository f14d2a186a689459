// src/presentation/http/controllers/auth.rs
use crate::application::commands::auth::{LoginUserCommand, RegisterUserCommand};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub app_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body rejections (bad JSON, wrong content type) use the same error body as
/// every other failure.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> HttpResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| HttpError::bad_request(rejection.body_text()))
}

fn require_credentials(email: &str, password: &str) -> HttpResult<()> {
    if email.trim().is_empty() {
        return Err(HttpError::bad_request("email is required"));
    }
    if password.is_empty() {
        return Err(HttpError::bad_request("password is required"));
    }
    Ok(())
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<RegisterResponse>)> {
    let payload = json_body(payload)?;
    require_credentials(&payload.email, &payload.password)?;

    let command = RegisterUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let user_id = state.services.auth.register(command).await.into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user_id.into(),
        }),
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> HttpResult<Json<LoginResponse>> {
    let payload = json_body(payload)?;
    require_credentials(&payload.email, &payload.password)?;
    if payload.app_id == 0 {
        return Err(HttpError::bad_request("app_id is required"));
    }

    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
        app_id: payload.app_id,
    };

    let token = state.services.auth.login(command).await.into_http()?;

    Ok(Json(LoginResponse { token: token.token }))
}
