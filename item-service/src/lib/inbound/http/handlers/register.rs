use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::json_body;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let body = json_body(payload)?;

    state
        .auth_service
        .register(body.into_credentials())
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData {
            success: "true".to_string(),
            message: "User created successfully".to_string(),
        },
    ))
}

/// Body shared by `/register` and `/login`. Missing fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl CredentialsRequestBody {
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.username, self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub success: String,
    pub message: String,
}
