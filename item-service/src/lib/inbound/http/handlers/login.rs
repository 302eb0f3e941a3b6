use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::json_body;
use super::register::CredentialsRequestBody;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let body = json_body(payload)?;

    let tokens = state
        .auth_service
        .login(body.into_credentials())
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub status: String,
    pub message: String,
    pub token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}
