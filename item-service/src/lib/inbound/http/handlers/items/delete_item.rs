use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_item(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let item_id = ItemId::parse(&item_id)
        .map_err(ItemError::from)
        .map_err(ApiError::from)?;

    tracing::debug!(username = %auth_user.username, item_id = %item_id, "Deleting item");

    state
        .item_service
        .delete_item(item_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
