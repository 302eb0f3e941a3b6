use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ItemResponseData;
use crate::domain::item::models::ItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<ApiSuccess<ItemResponseData>, ApiError> {
    // An unparseable id cannot name a stored item.
    let item_id =
        ItemId::parse(&item_id).map_err(|_| ApiError::NotFound("Item not found".to_string()))?;

    state
        .item_service
        .get_item(item_id)
        .await
        .map_err(ApiError::from)
        .map(|ref item| {
            ApiSuccess::new(
                StatusCode::OK,
                ItemResponseData::new("Item retrieved successfully", item),
            )
        })
}
