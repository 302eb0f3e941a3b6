use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::CreateItemRequestBody;
use super::ItemResponseData;
use crate::inbound::http::handlers::json_body;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateItemRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ItemResponseData>, ApiError> {
    let draft = json_body(payload)?
        .try_into_draft()
        .map_err(ApiError::from)?;

    tracing::debug!(username = %auth_user.username, name = %draft.name.as_str(), "Creating item");

    state
        .item_service
        .create_item(draft)
        .await
        .map_err(ApiError::from)
        .map(|ref item| {
            ApiSuccess::new(
                StatusCode::OK,
                ItemResponseData::new("Item created successfully", item),
            )
        })
}
