use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ItemResponseData;
use super::UpdateItemRequestBody;
use crate::domain::item::models::ItemId;
use crate::inbound::http::handlers::json_body;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(item_id): Path<String>,
    payload: Result<Json<UpdateItemRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<ItemResponseData>, ApiError> {
    let item_id =
        ItemId::parse(&item_id).map_err(|_| ApiError::NotFound("Item not found".to_string()))?;
    let patch = json_body(payload)?
        .try_into_patch()
        .map_err(ApiError::from)?;

    tracing::debug!(username = %auth_user.username, item_id = %item_id, "Updating item");

    state
        .item_service
        .update_item(item_id, patch)
        .await
        .map_err(ApiError::from)
        .map(|ref item| {
            ApiSuccess::new(
                StatusCode::OK,
                ItemResponseData::new("Item updated successfully", item),
            )
        })
}
