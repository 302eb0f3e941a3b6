use axum::extract::State;
use axum::http::StatusCode;

use super::ItemData;
use super::ItemsResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ItemsResponseData>, ApiError> {
    state
        .item_service
        .list_items()
        .await
        .map_err(ApiError::from)
        .map(|items| {
            ApiSuccess::new(
                StatusCode::OK,
                ItemsResponseData {
                    status: true,
                    message: "Items retrieved successfully".to_string(),
                    items: items.iter().map(ItemData::from).collect(),
                },
            )
        })
}
